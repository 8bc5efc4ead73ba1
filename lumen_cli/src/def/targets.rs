//! This module contains string definitions for different log targets for the [`tracing`] crate
//! Used in macros like [`tracing::info`]

lumen_engine::tracing_targets! {
    MAIN = "main",
    OUTPUT = "output",
}

//! Exported helper macros. They are `#[macro_export]`, so live at the crate root.

mod impl_utils;
mod targets;

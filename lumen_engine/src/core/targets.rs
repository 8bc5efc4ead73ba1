use crate::tracing_targets;

tracing_targets! {
    RENDERER = "renderer",
    OUTPUT = "output",
}

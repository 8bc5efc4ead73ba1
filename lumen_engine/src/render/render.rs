use crate::core::colour::Rgb8;
use crate::core::image::Image;
use derivative::Derivative;
use std::time::Duration;

/// Summary of a finished render, logged by the renderer
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Wall time spent filling the framebuffer
    pub duration: Duration,
    pub width: usize,
    pub height: usize,
    /// `width * height`
    pub num_px: usize,
    /// Size of the worker pool the rows were spread over
    pub num_threads: usize,
}

/// A quantised framebuffer, ready to be encoded
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Render {
    #[derivative(Debug = "ignore")]
    pub img: Image<Rgb8>,
    pub stats: RenderStats,
}

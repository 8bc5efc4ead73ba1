//! Ray-cast image synthesis: a vector kernel, rays, a pinhole camera over a sky gradient,
//! a parallel renderer and an ASCII PPM codec.

pub mod core;
pub mod output;
pub mod render;
pub mod scene;
pub mod shared;
pub mod skybox;

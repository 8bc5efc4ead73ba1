//! Serialisation of rendered framebuffers

pub mod ppm;

pub mod gradient;
pub mod solid;

use self::{gradient::GradientSkybox, solid::SolidSkybox};
use crate::core::types::Vector3;
use crate::shared::ray::Ray;
use enum_dispatch::enum_dispatch;
use std::fmt::Debug;

/// Gives the colour seen along a ray that doesn't hit anything.
///
/// Colours are returned as vectors, `x, y, z` being red, green, blue, nominally in `0..=1`.
#[enum_dispatch]
pub trait Skybox: Debug + Send + Sync {
    fn sky_colour(&self, ray: &Ray) -> Vector3;
}

#[enum_dispatch(Skybox)]
#[derive(Copy, Clone, Debug)]
pub enum SkyboxInstance {
    GradientSkybox,
    SolidSkybox,
}

impl Default for SkyboxInstance {
    fn default() -> Self { GradientSkybox::default().into() }
}

use crate::core::types::Vector3;
use crate::shared::ray::Ray;
use crate::skybox::Skybox;

/// A single colour, uniform everywhere
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SolidSkybox {
    pub colour: Vector3,
}

impl SolidSkybox {
    pub const fn new(colour: Vector3) -> Self { Self { colour } }
}

impl Skybox for SolidSkybox {
    fn sky_colour(&self, _ray: &Ray) -> Vector3 { self.colour }
}

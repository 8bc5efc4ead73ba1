use crate::core::types::Vector3;
use crate::shared::ray::Ray;
use crate::skybox::Skybox;

/// A skybox that mixes between white and blue, depending on the ray's `y` direction
///
/// Fades to blue at the top, white at the bottom.
///
/// # Note
/// The blend factor comes from the *raw* direction, not the normalised one, so the shape of the
/// gradient depends on the viewport geometry. For the default camera, `direction.y` spans `-1..=1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientSkybox {
    /// Colour where `direction.y == -1`
    pub bottom: Vector3,
    /// Colour where `direction.y == 1`
    pub top: Vector3,
}

impl GradientSkybox {
    pub const WHITE: Vector3 = Vector3::new(1., 1., 1.);
    pub const SKY_BLUE: Vector3 = Vector3::new(0.5, 0.7, 1.0);
}

impl Default for GradientSkybox {
    fn default() -> Self {
        Self {
            bottom: Self::WHITE,
            top: Self::SKY_BLUE,
        }
    }
}

impl Skybox for GradientSkybox {
    fn sky_colour(&self, ray: &Ray) -> Vector3 {
        let t = (ray.direction().y + 1.) * 0.5;
        self.bottom.lerp_to(&self.top, t)
    }
}

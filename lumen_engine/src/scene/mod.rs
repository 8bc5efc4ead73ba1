use crate::scene::camera::Camera;
use crate::skybox::SkyboxInstance;

pub mod camera;

/// Everything that gets rendered: the camera, and what it sees
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub camera: Camera,
    pub skybox: SkyboxInstance,
}

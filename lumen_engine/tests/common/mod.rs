#![allow(dead_code)]

use lumen_engine::core::types::*;
use lumen_engine::render::render_opts::RenderOpts;
use lumen_engine::render::renderer::Renderer;
use lumen_engine::scene::Scene;
use rand::{Rng, SeedableRng};

pub type TestRng = rand::rngs::SmallRng;

pub const RENDERER_THREAD_COUNT: usize = 4;

/// Seeded, so failures are reproducible
pub fn rng() -> TestRng { TestRng::seed_from_u64(0x6c75_6d65_6e) }

pub fn random_vector(rng: &mut impl Rng) -> Vector3 {
    Vector3::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0))
}

/// Vector with small integer components, for which add/sub/mul are exact
pub fn random_integer_vector(rng: &mut impl Rng) -> Vector3 {
    let mut c = || rng.gen_range(-1000_i32..1000) as Number;
    Vector3::new(c(), c(), c())
}

/// Quick and dirty renders the scene
pub fn render_simple(scene: &Scene, render_opts: &RenderOpts) -> Image {
    let renderer = Renderer::new(RENDERER_THREAD_COUNT).expect("failed creating renderer");
    renderer.render(scene, render_opts).expect("render failed").img
}

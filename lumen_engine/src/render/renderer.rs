use crate::core::colour::Rgb8;
use crate::core::image::Image;
use crate::core::targets::*;
use crate::core::types::Vector3;
use crate::render::render::{Render, RenderStats};
use crate::render::render_opts::RenderOpts;
use crate::scene::camera::{CamInvalidError, Viewport};
use crate::scene::Scene;
use crate::shared::validate;
use crate::skybox::Skybox;
use puffin::{profile_function, profile_scope};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug)]
pub struct Renderer {
    /// A thread pool used to distribute the workload
    thread_pool: ThreadPool,
}

#[derive(Error, Debug)]
pub enum RendererCreateError {
    #[error("failed to create worker thread pool")]
    ThreadPoolError {
        #[from]
        source: ThreadPoolBuildError,
    },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("couldn't calculate viewport")]
    InvalidCamera {
        #[from]
        source: CamInvalidError,
    },
    #[error("image dimensions {width}x{height} overflow the pixel count")]
    DimensionsTooLarge { width: usize, height: usize },
    /// A pixel evaluated to NaN or infinity. Reported instead of writing a garbage pixel
    #[error("pixel ({x}, {y}) has a non-finite colour {colour:?}")]
    NonFiniteColour { x: usize, y: usize, colour: Vector3 },
}

impl Renderer {
    /// Creates a renderer backed by `num_threads` worker threads.
    ///
    /// Passing `0` lets [`rayon`] pick (normally one per logical core).
    pub fn new(num_threads: usize) -> Result<Self, RendererCreateError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|id| format!("Renderer::worker_{id}"))
            .build()
            .map_err(RendererCreateError::from)?;

        Ok(Self { thread_pool: pool })
    }

    /// Renders the scene into a framebuffer of 8-bit pixels.
    ///
    /// The returned image stores rows top to bottom, which is the order they are written out in.
    pub fn render(&self, scene: &Scene, render_opts: &RenderOpts) -> Result<Render, RenderError> {
        profile_function!();

        let viewport = scene.camera.calculate_viewport(render_opts).inspect_err(|err| {
            debug!(target: RENDERER, ?err, "couldn't calculate viewport");
        })?;
        trace!(target: RENDERER, ?viewport, "calculated viewport");

        self.render_actual(scene, render_opts, viewport)
    }

    /// Renders a single pixel in the scene, and returns the colour before quantisation
    ///
    /// `(i, j)` are the column, and the row counted up from the bottom of the image.
    pub fn render_px(scene: &Scene, viewport: &Viewport, i: usize, j: usize, width: usize, height: usize) -> Vector3 {
        let ray = viewport.calc_ray(i, j, width, height);
        validate::ray(ray);

        scene.skybox.sky_colour(&ray)
    }

    fn render_actual(
        &self,
        scene: &Scene,
        render_opts: &RenderOpts,
        viewport: Viewport,
    ) -> Result<Render, RenderError> {
        profile_function!();

        let [w, h] = render_opts.dims();
        let num_px = w
            .checked_mul(h)
            .ok_or(RenderError::DimensionsTooLarge { width: w, height: h })?;
        debug!(target: RENDERER, width = w, height = h, "rendering image");

        let mut img = Image::<Rgb8>::new_blank(w, h);

        let start = puffin::now_ns();
        let num_threads = self.thread_pool.current_num_threads();
        if num_px > 0 {
            self.thread_pool.install(|| {
                img.par_rows_mut().try_for_each(|(row, pixels)| {
                    profile_scope!("row");
                    // Image row 0 is the top of the picture, which is the last viewport row
                    let j = h - 1 - row;
                    for (i, px) in pixels.iter_mut().enumerate() {
                        let colour = Self::render_px(scene, &viewport, i, j, w, h);
                        *px = Rgb8::try_from_unit(colour).ok_or(RenderError::NonFiniteColour { x: i, y: j, colour })?;
                    }
                    Ok::<(), RenderError>(())
                })
            })?;
        }
        let end = puffin::now_ns();
        let duration = Duration::from_nanos(end.abs_diff(start));

        let stats = RenderStats {
            duration,
            width: w,
            height: h,
            num_px,
            num_threads,
        };
        debug!(target: RENDERER, ?stats, "render complete");

        Ok(Render { img, stats })
    }
}

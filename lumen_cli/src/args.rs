use clap::{Parser, ValueEnum};
use lumen_engine::core::types::{Number, Point3};
use lumen_engine::render::render_opts::RenderOpts;
use lumen_engine::scene::camera::Camera;
use lumen_engine::scene::Scene;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lumen", version)]
#[command(about = "Renders a sky gradient and prints it as an ASCII PPM image")]
pub struct Args {
    /// Image width in pixels, the height follows from the aspect ratio
    #[arg(long, default_value_t = RenderOpts::default().image_width)]
    pub width: usize,

    /// Width divided by height
    #[arg(long, default_value_t = RenderOpts::default().aspect_ratio)]
    pub aspect_ratio: Number,

    /// Height of the viewport in world units
    #[arg(long, default_value_t = Camera::default().viewport_height)]
    pub viewport_height: Number,

    /// Distance from the eye to the viewport
    #[arg(long, default_value_t = Camera::default().focal_length)]
    pub focal_length: Number,

    /// Number of render threads, 0 uses one per core
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,

    /// Write the image to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Set logging level, overrides `RUST_LOG`
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl Args {
    pub fn render_opts(&self) -> RenderOpts {
        RenderOpts {
            aspect_ratio: self.aspect_ratio,
            image_width: self.width,
        }
    }

    pub fn scene(&self) -> Scene {
        Scene {
            camera: Camera {
                pos: Point3::ZERO,
                viewport_height: self.viewport_height,
                focal_length: self.focal_length,
            },
            skybox: Default::default(),
        }
    }
}

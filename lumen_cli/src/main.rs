use crate::args::Args;
use crate::def::targets::*;
use anyhow::Context;
use clap::Parser;
use lumen_engine::output::ppm;
use lumen_engine::render::renderer::Renderer;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod args;
mod def;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let render_opts = args.render_opts();
    let scene = args.scene();
    info!(target: MAIN, ?render_opts, camera = ?scene.camera, "starting render");

    let renderer = Renderer::new(args.threads).context("failed to create renderer")?;
    let render = renderer.render(&scene, &render_opts).context("render failed")?;
    info!(target: MAIN, stats = ?render.stats, "render finished");

    let document = ppm::encode_image(&render.img).context("failed to encode image")?;
    debug!(target: OUTPUT, bytes = document.len(), "encoded ppm document");

    match &args.output {
        Some(path) => {
            std::fs::write(path, &document).with_context(|| format!("failed to write image to {}", path.display()))?;
            info!(target: OUTPUT, path = %path.display(), "wrote image");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&document).context("failed to write image to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }

    Ok(())
}

/// Logs go to stderr, stdout is reserved for the image
fn init_logging(args: &Args) {
    let filter = match args.log_level {
        Some(level) => EnvFilter::new(level.as_filter()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

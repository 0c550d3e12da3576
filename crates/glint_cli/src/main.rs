use std::io::Stdout;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, reference_scene, scene_to_json, SceneDescription};
use glint_tracer::{render, render_parallel, Camera, ImageBuffer, RenderConfig, Scene};
use pbr::ProgressBar;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;

fn load(args: &Args) -> Result<SceneDescription> {
    let mut scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, rendering the reference scene");
            reference_scene()
        }
    };
    args.apply_overrides(&mut scene);
    Ok(scene)
}

fn render_image(
    args: &Args,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Result<ImageBuffer> {
    if args.single_threaded {
        return Ok(render(camera, scene, config)?);
    }

    let total_pixels = camera.image_width as u64 * camera.image_height as u64;
    let progress: Option<Mutex<ProgressBar<Stdout>>> =
        (!args.no_progress).then(|| Mutex::new(ProgressBar::new(total_pixels)));

    let image = render_parallel(camera, scene, config, |result| {
        if let Some(Ok(mut pb)) = progress.as_ref().map(|p| p.lock()) {
            pb.add(result.bucket.pixel_count() as u64);
        }
    })?;

    if let Some(Ok(mut pb)) = progress.as_ref().map(|p| p.lock()) {
        pb.finish();
    }
    Ok(image)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let desc = load(&args)?;
    if args.dump_scene {
        println!("{}", scene_to_json(&desc)?);
        return Ok(());
    }
    desc.validate()?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the worker pool")?;
    }

    let scene = Scene::from_description(&desc).context("Invalid scene geometry")?;
    let camera = Camera::from_description(&desc.camera)?;
    let config = RenderConfig::default().with_settings(&desc.render);
    config.validate()?;

    log::info!(
        "Rendering '{}': {}x{}, {} objects, {} lights, max depth {}",
        desc.name,
        camera.image_width,
        camera.image_height,
        scene.len(),
        scene.lights().len(),
        config.max_depth
    );
    log::debug!("{:?}", config);

    let image = render_image(&args, &camera, &scene, &config)?;
    output::save_image(&image, &args.output)?;

    Ok(())
}

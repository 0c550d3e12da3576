use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_core::{RenderSettings, SceneDescription};
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A recursive Whitted-style ray tracer")]
pub struct Args {
    /// JSON scene file; the built-in reference scene is used when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels, overrides the scene
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Image height in pixels, overrides the scene
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Maximum number of surface hits per pixel
    #[arg(short = 'd', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_depth: Option<u32>,

    /// Bucket edge length for the parallel renderer
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub bucket_size: Option<u32>,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Render on the main thread only
    #[arg(long)]
    pub single_threaded: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print the effective scene as JSON and exit
    #[arg(long)]
    pub dump_scene: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Render overrides given on the command line.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            max_depth: self.max_depth,
            bucket_size: self.bucket_size,
            ..Default::default()
        }
    }

    /// Layer the command line on top of a loaded scene.
    pub fn apply_overrides(&self, scene: &mut SceneDescription) {
        if let Some(width) = self.width {
            scene.camera.width = width;
        }
        if let Some(height) = self.height {
            scene.camera.height = height;
        }
        scene.render = scene.render.merge(self.render_settings());
    }
}

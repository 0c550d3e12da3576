use std::path::Path;

use anyhow::{Context, Result};
use glint_tracer::ImageBuffer;

/// Encode `image` to `path`, picking the format from the extension.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .context("Pixel buffer does not match the image resolution")?;

    rgb.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

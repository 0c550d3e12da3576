//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that render independently and in
//! parallel using rayon. The tracer holds no mutable state, so buckets only
//! share read-only access to the scene and camera.

use std::time::Instant;

use glint_math::Color;
use rayon::prelude::*;

use crate::error::TracerResult;
use crate::renderer::{render_pixel, ImageBuffer, RenderConfig};
use crate::{Camera, Scene};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Split an image into buckets, ordered from the center outward.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance of their centers from the image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f32 + b.width as f32 / 2.0;
        let by = b.y as f32 + b.height as f32 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    // Stable, so equidistant buckets keep scanline order
    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Render a single bucket. Pixels come back in row-major order.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> TracerResult<Vec<Color>> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let (x, y) = (bucket.x + local_x, bucket.y + local_y);
            pixels.push(render_pixel(camera, scene, x, y, config)?);
        }
    }

    Ok(pixels)
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

/// Render the image with one rayon task per bucket.
///
/// `on_bucket` runs on the worker thread as soon as each bucket finishes;
/// use it to report progress. Output is identical to [`crate::render`].
pub fn render_parallel<F>(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    on_bucket: F,
) -> TracerResult<ImageBuffer>
where
    F: Fn(&BucketResult) + Sync,
{
    camera.validate()?;
    config.validate()?;

    let start = Instant::now();
    let buckets = generate_buckets(camera.image_width, camera.image_height, config.bucket_size);
    log::debug!(
        "Rendering {} buckets of up to {}x{} on {} threads",
        buckets.len(),
        config.bucket_size,
        config.bucket_size,
        rayon::current_num_threads()
    );

    let results = buckets
        .par_iter()
        .map(|bucket| -> TracerResult<BucketResult> {
            let pixels = render_bucket(bucket, camera, scene, config)?;
            let result = BucketResult::new(*bucket, pixels);
            on_bucket(&result);
            Ok(result)
        })
        .collect::<TracerResult<Vec<_>>>()?;

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!(
        "Rendered {}x{} in {:.2?} ({} buckets)",
        camera.image_width,
        camera.image_height,
        start.elapsed(),
        results.len()
    );
    Ok(image)
}

//! Recursive Whitted-style tracer.
//!
//! Each pixel follows one chain of mirror bounces:
//! - find the nearest hit, stop on a miss
//! - shade it, stop when every light is blocked
//! - add the shaded color scaled by the attenuation so far
//! - bounce off the surface and repeat, up to `max_depth` hits

use std::time::Instant;

use glint_core::RenderSettings;
use glint_math::{normalize, reflect, Color, Interval, Ray, Vec3};

use crate::bucket::BucketResult;
use crate::error::{TracerError, TracerResult};
use crate::shading::shade;
use crate::{Camera, Scene};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum number of surface hits per pixel
    pub max_depth: u32,
    /// Constant term added to every lit hit
    pub ambient: f32,
    /// Blinn-Phong shininess
    pub specular_exponent: f32,
    /// Offset along the normal for shadow and reflection rays
    pub surface_bias: f32,
    /// Edge length of the square tiles used by the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            ambient: 0.05,
            specular_exponent: 50.0,
            surface_bias: 1e-4,
            bucket_size: crate::bucket::DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Apply the overrides set in `settings`.
    pub fn with_settings(mut self, settings: &RenderSettings) -> Self {
        if let Some(max_depth) = settings.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(ambient) = settings.ambient {
            self.ambient = ambient;
        }
        if let Some(exponent) = settings.specular_exponent {
            self.specular_exponent = exponent;
        }
        if let Some(bias) = settings.surface_bias {
            self.surface_bias = bias;
        }
        if let Some(bucket_size) = settings.bucket_size {
            self.bucket_size = bucket_size;
        }
        self
    }

    pub fn validate(&self) -> TracerResult<()> {
        if self.max_depth == 0 {
            return Err(TracerError::InvalidConfig("max_depth must be at least 1".into()));
        }
        if self.bucket_size == 0 {
            return Err(TracerError::InvalidConfig("bucket_size must be at least 1".into()));
        }
        for (name, value) in [
            ("ambient", self.ambient),
            ("specular_exponent", self.specular_exponent),
            ("surface_bias", self.surface_bias),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TracerError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Color seen along `ray`, clamped to [0, 1].
///
/// `eye` is the camera position used for specular highlights at every
/// bounce.
pub fn trace(scene: &Scene, eye: Vec3, ray: &Ray, config: &RenderConfig) -> TracerResult<Color> {
    let mut color = Color::ZERO;
    let mut attenuation = 1.0;
    let mut ray = *ray;

    for _ in 0..config.max_depth {
        let Some(hit) = scene.intersect(&ray, None) else {
            break;
        };

        let surface = scene.surface(&hit)?;
        let point = ray.at(hit.distance());
        let normal = surface.normal_at(point);

        let Some(shaded) = shade(scene, hit.index, point, normal, surface, eye, config) else {
            break;
        };

        color += attenuation * shaded;
        attenuation *= surface.reflection();
        if attenuation == 0.0 {
            break;
        }

        let Some(direction) = normalize(reflect(ray.direction(), normal)) else {
            break;
        };
        ray = Ray::new(point + normal * config.surface_bias, direction);
    }

    Ok(clamp_color(color))
}

/// Clamp every channel to [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Convert a color to 8-bit RGB, truncating each channel.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = clamp_color(color) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> TracerResult<Color> {
    trace(scene, camera.position(), &camera.get_ray(x, y), config)
}

/// Row-major image of linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a finished bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Packed RGB bytes, row 0 first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the whole image on the calling thread.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> TracerResult<ImageBuffer> {
    camera.validate()?;
    config.validate()?;

    let start = Instant::now();
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, scene, x, y, config)?;
            image.set(x, y, color);
        }
    }

    log::info!(
        "Rendered {}x{} in {:.2?}",
        camera.image_width,
        camera.image_height,
        start.elapsed()
    );
    Ok(image)
}

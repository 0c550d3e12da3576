//! Glint tracer - recursive Whitted-style CPU ray tracing.
//!
//! Primary rays leave the camera through a screen rectangle, hit the
//! nearest primitive, get shaded against point lights with shadow rays and
//! then bounce as perfect mirror reflections for a bounded number of hits.
//!
//! The scene is immutable while rendering, so pixels can be traced in any
//! order and on any thread.

mod bucket;
mod camera;
mod error;
mod plane;
mod primitive;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;
mod triangle_strip;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{Camera, Screen, REFERENCE_SCREEN_OFFSET};
pub use error::{TracerError, TracerResult};
pub use plane::{checkerboard, Plane, PARALLEL_EPSILON, TILE_SIZE};
pub use primitive::{Intersection, Material, Primitive, Shape};
pub use renderer::{
    clamp_color, color_to_rgb, render, render_pixel, trace, ImageBuffer, RenderConfig,
};
pub use scene::{Light, Scene, SceneHit};
pub use shading::shade;
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use triangle_strip::TriangleStrip;

/// Re-export the math types used throughout the public API
pub use glint_math::{Color, Interval, Ray, Vec3};

//! Infinite plane with a procedural checkerboard.

use glint_math::{normalize, Color, Ray, Vec3};

use crate::error::{ensure_finite, TracerError, TracerResult};
use crate::primitive::{Material, Shape};

/// Rays whose direction makes a smaller dot product with the normal than
/// this are treated as parallel to the plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Checkerboard tile edge length in world units.
pub const TILE_SIZE: f32 = 0.5;

const LIGHT_TILE: Color = Color::ONE;
const DARK_TILE: Color = Color::ZERO;

/// Two-color checkerboard on the XZ coordinates of `point`.
///
/// Tile indices truncate toward zero before the parity test, so the tiles
/// touching x = 0 or z = 0 are twice as wide as the others.
pub fn checkerboard(point: Vec3) -> Color {
    let parity = |c: f32| ((c / TILE_SIZE) as i64).rem_euclid(2);
    if parity(point.x) == parity(point.z) {
        LIGHT_TILE
    } else {
        DARK_TILE
    }
}

/// An infinite plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    position: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a plane through `position`. The normal is normalized here.
    pub fn new(position: Vec3, normal: Vec3) -> TracerResult<Self> {
        ensure_finite("plane position", position)?;
        ensure_finite("plane normal", normal)?;
        let normal = normalize(normal).ok_or(TracerError::ZeroNormal(normal))?;

        Ok(Self {
            position,
            normal,
            material: Material::PLANE,
        })
    }

    /// Replace the default material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray) -> f32 {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return f32::INFINITY;
        }

        let t = (self.position - ray.origin()).dot(self.normal) / denom;
        if t >= 0.0 {
            t
        } else {
            f32::INFINITY
        }
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn color_at(&self, point: Vec3) -> Color {
        checkerboard(point)
    }

    fn material(&self) -> Material {
        self.material
    }
}

//! Triangle primitive.
//!
//! Intersection goes through the supporting plane first, then keeps the hit
//! only if it lies on the inner side of all three edges.

use glint_math::{Color, Ray, Vec3};

use crate::error::{ensure_finite, TracerError, TracerResult};
use crate::primitive::{ensure_color, Material, Shape};

/// Relative area below which three vertices count as collinear.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// A flat-shaded triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices, counter-clockwise seen from the front
    vertices: [Vec3; 3],
    /// Edge i runs from vertex i to vertex i + 1
    edges: [Vec3; 3],
    /// Unit face normal
    normal: Vec3,
    /// Plane offset, `normal · v0`
    offset: f32,
    color: Color,
    material: Material,
}

impl Triangle {
    /// Create a triangle, rejecting collinear vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, color: Color) -> TracerResult<Self> {
        for v in [v0, v1, v2] {
            ensure_finite("triangle vertex", v)?;
        }
        ensure_color(color)?;

        let e1 = v1 - v0;
        let e2 = v2 - v0;
        let cross = e1.cross(e2);
        let area = cross.length();
        if !(area > DEGENERATE_EPSILON * e1.length() * e2.length()) {
            return Err(TracerError::DegenerateTriangle(v0, v1, v2));
        }

        let normal = cross / area;
        Ok(Self {
            vertices: [v0, v1, v2],
            edges: [v1 - v0, v2 - v1, v0 - v2],
            normal,
            offset: normal.dot(v0),
            color,
            material: Material::TRIANGLE,
        })
    }

    /// Replace the default material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        self.vertices
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Shape for Triangle {
    fn intersect(&self, ray: &Ray) -> f32 {
        // No tolerance: only exactly parallel rays are rejected here
        let product = self.normal.dot(ray.direction());
        if product == 0.0 {
            return f32::INFINITY;
        }

        let t = (self.offset - self.normal.dot(ray.origin())) / product;
        if t < 0.0 {
            return f32::INFINITY;
        }

        let p = ray.at(t);
        let inside = self
            .edges
            .iter()
            .zip(self.vertices.iter())
            .all(|(edge, vertex)| self.normal.dot(edge.cross(p - *vertex)) >= 0.0);

        if inside {
            t
        } else {
            f32::INFINITY
        }
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.color
    }

    fn material(&self) -> Material {
        self.material
    }
}

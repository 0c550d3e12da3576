//! Triangle strips.

use glint_math::{Color, Ray, Vec3};

use crate::error::{TracerError, TracerResult};
use crate::primitive::{Intersection, Material, Shape};
use crate::triangle::Triangle;

/// A strip of triangles sharing one color and material.
///
/// `n` vertices expand to `n - 2` triangles. Every other triangle swaps its
/// first two vertices so the whole strip faces the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleStrip {
    triangles: Vec<Triangle>,
}

impl TriangleStrip {
    /// Expand `vertices` into triangles. Needs at least three vertices and
    /// fails on the first degenerate triangle.
    pub fn new(vertices: &[Vec3], color: Color) -> TracerResult<Self> {
        if vertices.len() < 3 {
            return Err(TracerError::StripTooShort(vertices.len()));
        }

        let triangles = vertices
            .windows(3)
            .enumerate()
            .map(|(i, w)| {
                if i % 2 == 0 {
                    Triangle::new(w[0], w[1], w[2], color)
                } else {
                    Triangle::new(w[1], w[0], w[2], color)
                }
            })
            .collect::<TracerResult<Vec<_>>>()?;

        Ok(Self { triangles })
    }

    /// Replace the default material on every triangle.
    pub fn with_material(mut self, material: Material) -> Self {
        for triangle in &mut self.triangles {
            *triangle = triangle.with_material(material);
        }
        self
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Nearest triangle hit along `ray`. Ties go to the earlier triangle.
    pub fn intersect(&self, ray: &Ray) -> Intersection {
        let mut nearest = Intersection::MISS;
        for (i, triangle) in self.triangles.iter().enumerate() {
            let t = triangle.intersect(ray);
            if t < nearest.distance {
                nearest = Intersection {
                    distance: t,
                    facet: Some(i),
                };
            }
        }
        nearest
    }

    /// The triangle `hit` selected.
    pub fn facet(&self, hit: &Intersection) -> TracerResult<&Triangle> {
        hit.facet
            .and_then(|i| self.triangles.get(i))
            .ok_or(TracerError::NoFacetSelected)
    }
}

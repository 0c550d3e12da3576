//! Shape trait and the closed set of renderable primitives.

use glint_core::{MaterialDescription, ObjectDescription};
use glint_math::{Color, Interval, Ray, Vec3};

use crate::error::{TracerError, TracerResult};
use crate::{Plane, Sphere, Triangle, TriangleStrip};

/// Surface response coefficients of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Weight of the Lambertian term
    pub diffuse: f32,
    /// Weight of the Blinn-Phong term
    pub specular: f32,
    /// Attenuation applied to everything seen in the mirror bounce
    pub reflection: f32,
}

impl Material {
    /// Defaults for planes.
    pub const PLANE: Material = Material {
        diffuse: 0.75,
        specular: 0.5,
        reflection: 0.25,
    };

    /// Defaults for spheres.
    pub const SPHERE: Material = Material {
        diffuse: 1.0,
        specular: 1.0,
        reflection: 0.5,
    };

    /// Defaults for triangles and triangle strips.
    pub const TRIANGLE: Material = Material {
        diffuse: 1.0,
        specular: 1.0,
        reflection: 1.0,
    };

    /// Create a material, rejecting coefficients outside [0, 1].
    pub fn new(diffuse: f32, specular: f32, reflection: f32) -> TracerResult<Self> {
        for (name, value) in [
            ("diffuse", diffuse),
            ("specular", specular),
            ("reflection", reflection),
        ] {
            if !Interval::UNIT.contains(value) {
                return Err(TracerError::CoefficientOutOfRange { name, value });
            }
        }
        Ok(Self {
            diffuse,
            specular,
            reflection,
        })
    }
}

impl TryFrom<MaterialDescription> for Material {
    type Error = TracerError;

    fn try_from(desc: MaterialDescription) -> TracerResult<Self> {
        Material::new(desc.diffuse, desc.specular, desc.reflection)
    }
}

/// Reject colors with channels outside [0, 1].
pub(crate) fn ensure_color(color: Color) -> TracerResult<()> {
    if color.to_array().iter().all(|&c| Interval::UNIT.contains(c)) {
        Ok(())
    } else {
        Err(TracerError::ColorOutOfRange(color))
    }
}

/// The capability set every concrete geometry provides.
pub trait Shape: Send + Sync {
    /// Distance along `ray` to the nearest visible surface point, or
    /// `f32::INFINITY` when the ray misses. Total over all ray inputs.
    fn intersect(&self, ray: &Ray) -> f32;

    /// Unit surface normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Surface color at a point on the surface.
    fn color_at(&self, point: Vec3) -> Color;

    /// Shading coefficients.
    fn material(&self) -> Material;

    fn diffuse(&self) -> f32 {
        self.material().diffuse
    }

    fn specular(&self) -> f32 {
        self.material().specular
    }

    fn reflection(&self) -> f32 {
        self.material().reflection
    }
}

/// Outcome of intersecting a ray with one primitive.
///
/// `facet` names the strip triangle that produced the hit. Surface queries
/// go through [`Primitive::surface`] with this value, so no primitive has to
/// remember which of its parts was hit last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Ray parameter of the hit, `f32::INFINITY` on a miss
    pub distance: f32,
    /// Index of the sub-triangle hit, only set for strips
    pub facet: Option<usize>,
}

impl Intersection {
    /// A ray that hit nothing.
    pub const MISS: Intersection = Intersection {
        distance: f32::INFINITY,
        facet: None,
    };

    /// Wrap a plain distance from a single-surface shape.
    #[inline]
    pub fn from_distance(distance: f32) -> Self {
        Self {
            distance,
            facet: None,
        }
    }

    /// Whether the ray hit anything.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.distance.is_finite()
    }
}

/// A renderable primitive.
#[derive(Debug, Clone)]
pub enum Primitive {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
    TriangleStrip(TriangleStrip),
}

impl Primitive {
    /// Intersect `ray` with this primitive.
    pub fn intersect(&self, ray: &Ray) -> Intersection {
        match self {
            Primitive::Plane(plane) => Intersection::from_distance(plane.intersect(ray)),
            Primitive::Sphere(sphere) => Intersection::from_distance(sphere.intersect(ray)),
            Primitive::Triangle(triangle) => Intersection::from_distance(triangle.intersect(ray)),
            Primitive::TriangleStrip(strip) => strip.intersect(ray),
        }
    }

    /// Resolve the shape that answers normal, color and material queries
    /// for `hit`.
    ///
    /// Strips need the facet recorded by their own [`Primitive::intersect`];
    /// an intersection without one fails with
    /// [`TracerError::NoFacetSelected`].
    pub fn surface(&self, hit: &Intersection) -> TracerResult<&dyn Shape> {
        match self {
            Primitive::Plane(plane) => Ok(plane as &dyn Shape),
            Primitive::Sphere(sphere) => Ok(sphere as &dyn Shape),
            Primitive::Triangle(triangle) => Ok(triangle as &dyn Shape),
            Primitive::TriangleStrip(strip) => strip.facet(hit).map(|t| t as &dyn Shape),
        }
    }

    /// Surface normal at `point` for the part of the primitive `hit` refers to.
    pub fn normal_at(&self, hit: &Intersection, point: Vec3) -> TracerResult<Vec3> {
        Ok(self.surface(hit)?.normal_at(point))
    }

    /// Surface color at `point` for the part of the primitive `hit` refers to.
    pub fn color_at(&self, hit: &Intersection, point: Vec3) -> TracerResult<Color> {
        Ok(self.surface(hit)?.color_at(point))
    }

    /// Shading coefficients for the part of the primitive `hit` refers to.
    pub fn material(&self, hit: &Intersection) -> TracerResult<Material> {
        Ok(self.surface(hit)?.material())
    }

    /// Replace the default material.
    pub fn with_material(self, material: Material) -> Self {
        match self {
            Primitive::Plane(plane) => Primitive::Plane(plane.with_material(material)),
            Primitive::Sphere(sphere) => Primitive::Sphere(sphere.with_material(material)),
            Primitive::Triangle(triangle) => Primitive::Triangle(triangle.with_material(material)),
            Primitive::TriangleStrip(strip) => {
                Primitive::TriangleStrip(strip.with_material(material))
            }
        }
    }

    /// Short kind name for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Plane(_) => "plane",
            Primitive::Sphere(_) => "sphere",
            Primitive::Triangle(_) => "triangle",
            Primitive::TriangleStrip(_) => "triangle_strip",
        }
    }

    /// Build and validate a primitive from its scene-file description.
    pub fn from_description(desc: &ObjectDescription) -> TracerResult<Self> {
        let (primitive, material): (Primitive, _) = match desc {
            ObjectDescription::Plane {
                position,
                normal,
                material,
            } => (Plane::new(*position, *normal)?.into(), material),
            ObjectDescription::Sphere {
                center,
                radius,
                color,
                material,
            } => (Sphere::new(*center, *radius, *color)?.into(), material),
            ObjectDescription::Triangle {
                vertices,
                color,
                material,
            } => {
                let [v0, v1, v2] = *vertices;
                (Triangle::new(v0, v1, v2, *color)?.into(), material)
            }
            ObjectDescription::TriangleStrip {
                vertices,
                color,
                material,
            } => (TriangleStrip::new(vertices, *color)?.into(), material),
        };

        match material {
            Some(desc) => Ok(primitive.with_material(Material::try_from(*desc)?)),
            None => Ok(primitive),
        }
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

impl From<TriangleStrip> for Primitive {
    fn from(strip: TriangleStrip) -> Self {
        Primitive::TriangleStrip(strip)
    }
}

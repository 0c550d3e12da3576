//! Renderable scene: ordered primitives plus point lights.
//!
//! There is no acceleration structure. Every query scans all objects in
//! order, which keeps tie-breaking deterministic.

use glint_core::SceneDescription;
use glint_math::{Color, Ray, Vec3};

use crate::error::{ensure_finite, TracerError, TracerResult};
use crate::primitive::{ensure_color, Intersection, Primitive, Shape};

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> TracerResult<Self> {
        ensure_finite("light position", position)?;
        ensure_color(color)?;
        Ok(Self { position, color })
    }
}

/// Nearest hit found by a scene scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    /// Index of the object that was hit
    pub index: usize,
    /// Per-object intersection, needed for surface queries
    pub intersection: Intersection,
}

impl SceneHit {
    #[inline]
    pub fn distance(&self) -> f32 {
        self.intersection.distance
    }
}

/// Immutable collection of primitives and lights.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Primitive>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive, returning its index.
    pub fn add(&mut self, object: impl Into<Primitive>) -> usize {
        self.objects.push(object.into());
        self.objects.len() - 1
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest object hit by `ray`, skipping `exclude`.
    ///
    /// Objects are scanned in insertion order and only a strictly closer hit
    /// replaces the current one, so the lowest index wins ties.
    pub fn intersect(&self, ray: &Ray, exclude: Option<usize>) -> Option<SceneHit> {
        let mut nearest: Option<SceneHit> = None;

        for (index, object) in self.objects.iter().enumerate() {
            if Some(index) == exclude {
                continue;
            }
            let intersection = object.intersect(ray);
            let closer = match &nearest {
                Some(hit) => intersection.distance < hit.distance(),
                None => intersection.is_hit(),
            };
            if closer {
                nearest = Some(SceneHit {
                    index,
                    intersection,
                });
            }
        }

        nearest
    }

    /// Whether anything other than `exclude` lies along `ray`.
    ///
    /// Any finite hit counts, including ones beyond the light.
    pub fn is_occluded(&self, ray: &Ray, exclude: usize) -> bool {
        self.objects
            .iter()
            .enumerate()
            .any(|(index, object)| index != exclude && object.intersect(ray).is_hit())
    }

    /// The object a hit refers to.
    pub fn object(&self, index: usize) -> TracerResult<&Primitive> {
        self.objects
            .get(index)
            .ok_or(TracerError::UnknownObject(index))
    }

    /// Resolve the shape answering surface queries for `hit`.
    pub fn surface(&self, hit: &SceneHit) -> TracerResult<&dyn Shape> {
        self.object(hit.index)?.surface(&hit.intersection)
    }

    /// Build primitives and lights from a scene description.
    pub fn from_description(desc: &SceneDescription) -> TracerResult<Self> {
        let mut scene = Scene::new();

        for (index, object) in desc.objects.iter().enumerate() {
            let primitive =
                Primitive::from_description(object).map_err(|e| TracerError::InvalidObject {
                    index,
                    kind: object.kind(),
                    source: Box::new(e),
                })?;
            scene.add(primitive);
        }

        for light in &desc.lights {
            scene.add_light(Light::new(light.position, light.color)?);
        }

        log::debug!(
            "Built scene '{}': {} objects, {} lights",
            desc.name,
            scene.len(),
            scene.lights.len()
        );

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere};
    use glint_core::{reference_scene, ObjectDescription};

    fn sphere_at(z: f32) -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, z), 0.5, Color::ONE).unwrap()
    }

    #[test]
    fn test_nearest_object_wins() {
        let mut scene = Scene::new();
        scene.add(sphere_at(10.0));
        scene.add(sphere_at(5.0));

        let hit = scene.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), None).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.distance() - 4.5).abs() < 1e-5);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let mut scene = Scene::new();
        scene.add(sphere_at(5.0));
        scene.add(sphere_at(5.0));

        let hit = scene.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), None).unwrap();
        assert_eq!(hit.index, 0);

        let hit = scene.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), Some(0)).unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn test_miss_returns_none() {
        let mut scene = Scene::new();
        scene.add(sphere_at(5.0));
        assert!(scene.intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), None).is_none());
    }

    #[test]
    fn test_occlusion_ignores_excluded_object() {
        let mut scene = Scene::new();
        let floor = scene.add(Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::Y).unwrap());
        let ray = Ray::new(Vec3::new(0.0, -0.4999, 0.0), Vec3::Y);

        assert!(!scene.is_occluded(&ray, floor));

        scene.add(Sphere::new(Vec3::new(0.0, 2.0, 0.0), 0.5, Color::ONE).unwrap());
        assert!(scene.is_occluded(&ray, floor));
    }

    #[test]
    fn test_unknown_object() {
        let scene = Scene::new();
        let hit = SceneHit {
            index: 3,
            intersection: Intersection::from_distance(1.0),
        };
        assert!(matches!(
            scene.surface(&hit),
            Err(TracerError::UnknownObject(3))
        ));
    }

    #[test]
    fn test_from_reference_description() {
        let scene = Scene::from_description(&reference_scene()).unwrap();
        assert_eq!(scene.len(), 6);
        assert_eq!(scene.lights().len(), 2);
        assert_eq!(scene.objects()[0].kind(), "plane");
    }

    #[test]
    fn test_from_description_reports_object_index() {
        let mut desc = reference_scene();
        desc.add_object(ObjectDescription::Triangle {
            vertices: [Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0)],
            color: Color::ONE,
            material: None,
        });

        match Scene::from_description(&desc) {
            Err(TracerError::InvalidObject { index, kind, .. }) => {
                assert_eq!(index, 6);
                assert_eq!(kind, "triangle");
            }
            other => panic!("expected InvalidObject, got {:?}", other),
        }
    }
}

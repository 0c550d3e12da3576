//! Scene description types for Glint.
//!
//! This module defines the plain-data representation of a scene as it is
//! stored on disk. Vectors and colors serialize as `[x, y, z]` arrays and
//! objects are tagged by a `"type"` field:
//!
//! ```json
//! { "type": "sphere", "center": [0.75, 0.1, 1.0], "radius": 0.6, "color": [0.0, 0.0, 1.0] }
//! ```

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

use crate::loader::{LoadError, LoadResult};

/// Surface response coefficients, each in [0, 1].
///
/// Objects without an explicit material use the defaults of their kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescription {
    /// Lambertian weight
    pub diffuse: f32,

    /// Blinn-Phong weight
    pub specular: f32,

    /// Weight of the mirror bounce
    pub reflection: f32,
}

/// One renderable object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    /// Infinite plane with a procedural checkerboard.
    Plane {
        position: Vec3,
        normal: Vec3,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<MaterialDescription>,
    },

    Sphere {
        center: Vec3,
        radius: f32,
        color: Color,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<MaterialDescription>,
    },

    /// Single triangle, vertices counter-clockwise seen from the front.
    Triangle {
        vertices: [Vec3; 3],
        color: Color,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<MaterialDescription>,
    },

    /// Strip of `vertices.len() - 2` triangles sharing one color.
    TriangleStrip {
        vertices: Vec<Vec3>,
        color: Color,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<MaterialDescription>,
    },
}

impl ObjectDescription {
    /// Short kind name, matching the serialized `"type"` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ObjectDescription::Plane { .. } => "plane",
            ObjectDescription::Sphere { .. } => "sphere",
            ObjectDescription::Triangle { .. } => "triangle",
            ObjectDescription::TriangleStrip { .. } => "triangle_strip",
        }
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: Vec3,
    pub color: Color,
}

/// Screen rectangle on the z = 0 plane, in (x0, y0, x1, y1) order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenDescription {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Camera and output resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    /// Eye position
    pub position: Vec3,

    /// Point the camera faces. Kept for scene-file compatibility; the
    /// screen rectangle alone decides the framing.
    #[serde(default)]
    pub look_at: Vec3,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Explicit screen rectangle. Derived from the aspect ratio when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<ScreenDescription>,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.35, -1.0),
            look_at: Vec3::ZERO,
            width: 400,
            height: 300,
            screen: None,
        }
    }
}

/// Optional overrides of the tracer's render configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specular_exponent: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_bias: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_size: Option<u32>,
}

impl RenderSettings {
    /// Layer `other` on top of `self`: fields set in `other` win.
    pub fn merge(self, other: RenderSettings) -> RenderSettings {
        RenderSettings {
            max_depth: other.max_depth.or(self.max_depth),
            ambient: other.ambient.or(self.ambient),
            specular_exponent: other.specular_exponent.or(self.specular_exponent),
            surface_bias: other.surface_bias.or(self.surface_bias),
            bucket_size: other.bucket_size.or(self.bucket_size),
        }
    }
}

/// A complete scene: ordered objects, lights, camera and render overrides.
///
/// Object order matters: the tracer identifies objects by their index and
/// resolves equal-distance hits in favor of the earlier one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (informational)
    #[serde(default = "default_name")]
    pub name: String,

    pub objects: Vec<ObjectDescription>,

    pub lights: Vec<LightDescription>,

    #[serde(default)]
    pub camera: CameraDescription,

    #[serde(default)]
    pub render: RenderSettings,
}

fn default_name() -> String {
    "untitled".to_string()
}

impl SceneDescription {
    /// Create an empty scene with the default camera.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            lights: Vec::new(),
            camera: CameraDescription::default(),
            render: RenderSettings::default(),
        }
    }

    /// Append an object, returning its index.
    pub fn add_object(&mut self, object: ObjectDescription) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Append a point light.
    pub fn add_light(&mut self, position: Vec3, color: Color) {
        self.lights.push(LightDescription { position, color });
    }

    /// Get the number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check the structural requirements a renderable scene must meet.
    ///
    /// Geometry itself is validated later, when primitives are built.
    pub fn validate(&self) -> LoadResult<()> {
        if self.objects.is_empty() {
            return Err(LoadError::Invalid("scene has no objects".into()));
        }
        if self.lights.is_empty() {
            return Err(LoadError::Invalid("scene has no lights".into()));
        }
        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(LoadError::Invalid(format!(
                "image resolution must be non-zero, got {}x{}",
                self.camera.width, self.camera.height
            )));
        }
        if self.render.max_depth == Some(0) {
            return Err(LoadError::Invalid("max_depth must be at least 1".into()));
        }
        if self.render.bucket_size == Some(0) {
            return Err(LoadError::Invalid("bucket_size must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_scene() -> SceneDescription {
        let mut scene = SceneDescription::new("minimal");
        scene.add_object(ObjectDescription::Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
            color: Color::ONE,
            material: None,
        });
        scene.add_light(Vec3::new(0.0, 5.0, 0.0), Color::ONE);
        scene
    }

    #[test]
    fn test_add_object_returns_index() {
        let mut scene = minimal_scene();
        let index = scene.add_object(ObjectDescription::Plane {
            position: Vec3::ZERO,
            normal: Vec3::Y,
            material: None,
        });
        assert_eq!(index, 1);
        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.light_count(), 1);
    }

    #[test]
    fn test_validate_accepts_minimal_scene() {
        assert!(minimal_scene().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_scene() {
        let mut scene = minimal_scene();
        scene.objects.clear();
        assert!(matches!(scene.validate(), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_unlit_scene() {
        let mut scene = minimal_scene();
        scene.lights.clear();
        assert!(matches!(scene.validate(), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_resolution() {
        let mut scene = minimal_scene();
        scene.camera.height = 0;
        assert!(matches!(scene.validate(), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let mut scene = minimal_scene();
        scene.render.max_depth = Some(0);
        assert!(matches!(scene.validate(), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_render_settings_merge() {
        let file = RenderSettings {
            max_depth: Some(3),
            ambient: Some(0.1),
            ..Default::default()
        };
        let cli = RenderSettings {
            max_depth: Some(8),
            ..Default::default()
        };

        let merged = file.merge(cli);
        assert_eq!(merged.max_depth, Some(8));
        assert_eq!(merged.ambient, Some(0.1));
        assert_eq!(merged.bucket_size, None);
    }

    #[test]
    fn test_object_kind() {
        let strip = ObjectDescription::TriangleStrip {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            color: Color::ONE,
            material: None,
        };
        assert_eq!(strip.kind(), "triangle_strip");
    }
}

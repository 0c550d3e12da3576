//! Scene file loading.
//!
//! Scenes are stored as JSON. Loading parses the file and runs the
//! structural checks of [`SceneDescription::validate`].

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a JSON scene file.
///
/// The scene name defaults to the file stem when the file does not set one.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_scene;
///
/// let scene = load_scene("scenes/mirror_wall.json")?;
/// println!("Loaded {} objects", scene.object_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&text)?;

    if scene.name == "untitled" {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            scene.name = stem.to_string();
        }
    }

    log::info!(
        "Loaded scene '{}' from {}: {} objects, {} lights",
        scene.name,
        path.display(),
        scene.object_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Parse a scene from a JSON string.
pub fn load_scene_from_str(text: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(text)?;
    scene.validate()?;
    Ok(scene)
}

/// Serialize a scene to pretty-printed JSON.
pub fn scene_to_json(scene: &SceneDescription) -> LoadResult<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::reference_scene;
    use crate::scene::ObjectDescription;
    use glint_math::Vec3;

    #[test]
    fn test_parse_minimal_scene() {
        let text = r#"{
            "objects": [
                { "type": "sphere", "center": [0.0, 0.0, 2.0], "radius": 0.5, "color": [1.0, 0.0, 0.0] },
                { "type": "plane", "position": [0.0, -0.5, 0.0], "normal": [0.0, 1.0, 0.0],
                  "material": { "diffuse": 0.5, "specular": 0.0, "reflection": 0.0 } }
            ],
            "lights": [ { "position": [5.0, 5.0, -10.0], "color": [1.0, 1.0, 1.0] } ]
        }"#;

        let scene = load_scene_from_str(text).unwrap();
        assert_eq!(scene.name, "untitled");
        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.camera.width, 400);

        match &scene.objects[0] {
            ObjectDescription::Sphere { center, radius, .. } => {
                assert_eq!(*center, Vec3::new(0.0, 0.0, 2.0));
                assert_eq!(*radius, 0.5);
            }
            other => panic!("expected sphere, got {:?}", other),
        }

        match &scene.objects[1] {
            ObjectDescription::Plane { material, .. } => {
                assert_eq!(material.map(|m| m.diffuse), Some(0.5));
            }
            other => panic!("expected plane, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_triangle_strip() {
        let text = r#"{
            "objects": [
                { "type": "triangle_strip",
                  "vertices": [[0,0,0],[1,0,0],[0,1,0],[1,1,0]],
                  "color": [0.0, 1.0, 0.0] }
            ],
            "lights": [ { "position": [0.0, 0.0, -5.0], "color": [1.0, 1.0, 1.0] } ],
            "render": { "max_depth": 2 }
        }"#;

        let scene = load_scene_from_str(text).unwrap();
        assert_eq!(scene.render.max_depth, Some(2));
        match &scene.objects[0] {
            ObjectDescription::TriangleStrip { vertices, .. } => assert_eq!(vertices.len(), 4),
            other => panic!("expected strip, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_object_type_is_json_error() {
        let text = r#"{
            "objects": [ { "type": "torus", "center": [0,0,0] } ],
            "lights": []
        }"#;
        assert!(matches!(load_scene_from_str(text), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_structural_error_is_invalid() {
        let text = r#"{ "objects": [], "lights": [] }"#;
        assert!(matches!(load_scene_from_str(text), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_reference_scene_json_roundtrip() {
        let scene = reference_scene();
        let json = scene_to_json(&scene).unwrap();
        let parsed = load_scene_from_str(&json).unwrap();
        assert_eq!(parsed, scene);
    }

    #[test]
    fn test_bundled_scene_files() {
        let reference_text = include_str!("../../../scenes/reference.json");
        let reference = load_scene_from_str(reference_text).unwrap();
        assert_eq!(reference, reference_scene());

        let mirror_text = include_str!("../../../scenes/mirror_wall.json");
        let mirror = load_scene_from_str(mirror_text).unwrap();
        assert_eq!(mirror.render.max_depth, Some(6));
        assert_eq!(mirror.objects[1].kind(), "triangle_strip");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_scene("/definitely/not/here/scene.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}

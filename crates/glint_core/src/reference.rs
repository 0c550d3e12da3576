//! The built-in reference scene.
//!
//! A checkered floor, three colored spheres, two small triangles and two
//! point lights, seen from slightly above the floor.

use glint_math::{Color, Vec3};

use crate::scene::{CameraDescription, ObjectDescription, SceneDescription};

/// Build the reference scene used when no scene file is given.
pub fn reference_scene() -> SceneDescription {
    let mut scene = SceneDescription::new("reference");

    scene.add_object(ObjectDescription::Plane {
        position: Vec3::new(0.0, -0.5, 0.0),
        normal: Vec3::Y,
        material: None,
    });

    // Blue, purple, orange
    for (center, color) in [
        (Vec3::new(0.75, 0.1, 1.0), Color::new(0.0, 0.0, 1.0)),
        (Vec3::new(-0.75, 0.1, 2.25), Color::new(0.5, 0.223, 0.5)),
        (Vec3::new(-2.75, 0.1, 3.5), Color::new(1.0, 0.572, 0.184)),
    ] {
        scene.add_object(ObjectDescription::Sphere {
            center,
            radius: 0.6,
            color,
            material: None,
        });
    }

    scene.add_object(ObjectDescription::Triangle {
        vertices: [
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(-1.0, -0.5, -0.5),
            Vec3::new(-1.0, 0.0, -0.5),
        ],
        color: Color::new(0.0, 1.0, 0.0),
        material: None,
    });
    scene.add_object(ObjectDescription::Triangle {
        vertices: [
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.0, 1.0),
            Vec3::new(0.5, -0.5, 1.0),
        ],
        color: Color::new(1.0, 0.0, 0.0),
        material: None,
    });

    // White and magenta
    scene.add_light(Vec3::new(5.0, 5.0, -10.0), Color::new(1.0, 1.0, 1.0));
    scene.add_light(Vec3::new(-10.0, 5.0, 5.0), Color::new(1.0, 0.0, 1.0));

    scene.camera = CameraDescription::default();
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene_contents() {
        let scene = reference_scene();
        assert_eq!(scene.object_count(), 6);
        assert_eq!(scene.light_count(), 2);
        assert_eq!(scene.objects[0].kind(), "plane");
        assert_eq!(
            scene.objects.iter().filter(|o| o.kind() == "sphere").count(),
            3
        );
        assert_eq!(scene.camera.position, Vec3::new(0.0, 0.35, -1.0));
        assert_eq!((scene.camera.width, scene.camera.height), (400, 300));
        assert!(scene.validate().is_ok());
    }
}

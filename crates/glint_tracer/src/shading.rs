//! Local illumination at a surface point.

use glint_math::{normalize, Color, Ray, Vec3};

use crate::primitive::Shape;
use crate::renderer::RenderConfig;
use crate::scene::Scene;

/// Shade a hit on object `index` with ambient, Lambertian diffuse and
/// Blinn-Phong specular terms.
///
/// Each light is tested with a shadow ray from just above the surface.
/// Occluded lights contribute nothing. Returns `None` when no light reaches
/// the point, which ends the bounce chain for that pixel.
///
/// The half vector always uses the direction to `eye`, the camera position,
/// even for reflected rays.
pub fn shade(
    scene: &Scene,
    index: usize,
    point: Vec3,
    normal: Vec3,
    surface: &dyn Shape,
    eye: Vec3,
    config: &RenderConfig,
) -> Option<Color> {
    let shadow_origin = point + normal * config.surface_bias;
    let to_eye = normalize(eye - point);
    let base = surface.color_at(point);

    let mut color = Color::splat(config.ambient);
    let mut lit = false;

    for light in scene.lights() {
        // A light sitting on the surface has no direction
        let Some(to_light) = normalize(light.position - point) else {
            continue;
        };
        if scene.is_occluded(&Ray::new(shadow_origin, to_light), index) {
            continue;
        }
        lit = true;

        color += surface.diffuse() * normal.dot(to_light).max(0.0) * base;

        if let Some(half) = to_eye.and_then(|e| normalize(to_light + e)) {
            let highlight = normal.dot(half).max(0.0).powf(config.specular_exponent);
            color += surface.specular() * highlight * light.color;
        }
    }

    lit.then_some(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Light;
    use crate::{Material, Plane, Sphere};

    fn matte_floor() -> Plane {
        Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::Y)
            .unwrap()
            .with_material(Material::new(0.75, 0.0, 0.25).unwrap())
    }

    fn lit_floor_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(matte_floor());
        scene.add_light(Light::new(Vec3::new(0.25, 10.0, 0.25), Color::ONE).unwrap());
        scene
    }

    fn shade_floor(scene: &Scene, point: Vec3, eye: Vec3) -> Option<Color> {
        let config = RenderConfig::default();
        shade(scene, 0, point, Vec3::Y, &matte_floor(), eye, &config)
    }

    #[test]
    fn test_overhead_light_full_diffuse() {
        let scene = lit_floor_scene();
        let point = Vec3::new(0.25, -0.5, 0.25);

        let color = shade_floor(&scene, point, Vec3::new(0.25, 2.0, 0.25)).unwrap();
        // ambient + diffuse * cos(0) * white
        assert!((color - Color::splat(0.8)).length() < 1e-5);
    }

    #[test]
    fn test_dark_tile_is_ambient_only() {
        let scene = lit_floor_scene();
        let point = Vec3::new(0.75, -0.5, 0.25);

        let color = shade_floor(&scene, point, Vec3::new(0.75, 2.0, 0.25)).unwrap();
        assert!((color - Color::splat(0.05)).length() < 1e-6);
    }

    #[test]
    fn test_occluded_point_is_dead_end() {
        let mut scene = lit_floor_scene();
        scene.add(Sphere::new(Vec3::new(0.25, 3.0, 0.25), 0.5, Color::ONE).unwrap());
        let point = Vec3::new(0.25, -0.5, 0.25);

        assert_eq!(shade_floor(&scene, point, Vec3::new(0.0, 2.0, -2.0)), None);
    }

    #[test]
    fn test_occluded_light_adds_nothing() {
        let mut scene = lit_floor_scene();
        // Blocks only the second light
        scene.add_light(Light::new(Vec3::new(5.0, 10.0, 0.25), Color::ONE).unwrap());
        scene.add(Sphere::new(Vec3::new(2.5, 4.75, 0.25), 0.5, Color::ONE).unwrap());
        let point = Vec3::new(0.25, -0.5, 0.25);

        let color = shade_floor(&scene, point, Vec3::new(0.25, 2.0, 0.25)).unwrap();
        assert!((color - Color::splat(0.8)).length() < 1e-5);
    }

    #[test]
    fn test_specular_highlight_uses_light_color() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Color::splat(0.2)).unwrap();
        let mut scene = Scene::new();
        scene.add(sphere);
        let red = Color::new(1.0, 0.0, 0.0);
        scene.add_light(Light::new(Vec3::new(0.0, 5.0, 0.0), red).unwrap());

        let point = Vec3::new(0.0, 1.0, 0.0);
        let eye = Vec3::new(0.0, 3.0, 0.0);
        let config = RenderConfig::default();
        let color = shade(&scene, 0, point, Vec3::Y, &sphere, eye, &config).unwrap();

        // ambient + diffuse (0.2) + full red highlight, unclamped
        assert!((color - Color::new(1.25, 0.25, 0.25)).length() < 1e-5);
    }
}

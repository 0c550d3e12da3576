//! Sphere primitive.

use glint_math::{Color, Ray, Vec3};

use crate::error::{ensure_finite, TracerError, TracerResult};
use crate::primitive::{ensure_color, Material, Shape};

/// A solid-colored sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f32, color: Color) -> TracerResult<Self> {
        ensure_finite("sphere center", center)?;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(TracerError::InvalidRadius(radius));
        }
        ensure_color(color)?;

        Ok(Self {
            center,
            radius,
            color,
            material: Material::SPHERE,
        })
    }

    /// Replace the default material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> f32 {
        let direction = ray.direction();
        let os = ray.origin() - self.center;

        let a = direction.length_squared();
        let b = 2.0 * direction.dot(os);
        let c = os.length_squared() - self.radius * self.radius;

        // Tangent rays count as misses
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return f32::INFINITY;
        }

        // Stable root pair, avoids cancellation when b*b >> 4ac
        let sqrt_disc = discriminant.sqrt();
        let q = if b < 0.0 {
            (-b - sqrt_disc) / 2.0
        } else {
            (-b + sqrt_disc) / 2.0
        };
        let (r0, r1) = (q / a, c / q);
        let (t0, t1) = (r0.min(r1), r0.max(r1));

        if t1 < 0.0 {
            f32::INFINITY
        } else if t0 >= 0.0 {
            t0
        } else {
            t1
        }
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.color
    }

    fn material(&self) -> Material {
        self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Color::new(0.5, 0.5, 0.5)).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!((unit_sphere().intersect(&ray) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!((unit_sphere().intersect(&ray) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_behind_ray() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(unit_sphere().intersect(&ray), f32::INFINITY);
    }

    #[test]
    fn test_tangent_ray_misses() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z);
        assert_eq!(unit_sphere().intersect(&ray), f32::INFINITY);
    }

    #[test]
    fn test_distance_to_center_minus_radius() {
        let sphere = Sphere::new(Vec3::new(0.75, 0.1, 1.0), 0.6, Color::ONE).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let origin = Vec3::new(
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
            );
            let to_center = sphere.center() - origin;
            let d = to_center.length();
            if d <= sphere.radius() + 0.1 {
                continue;
            }

            let toward = Ray::new(origin, to_center / d);
            let t = sphere.intersect(&toward);
            assert!((t - (d - 0.6)).abs() < 1e-3, "t = {}, d = {}", t, d);

            let away = Ray::new(origin, -to_center / d);
            assert_eq!(sphere.intersect(&away), f32::INFINITY);
        }
    }

    #[test]
    fn test_normal_points_outward() {
        let sphere = unit_sphere();
        let n = sphere.normal_at(Vec3::new(0.0, 1.0, 5.0));
        assert!((n - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let center = Vec3::ZERO;
        assert_eq!(
            Sphere::new(center, -1.0, Color::ONE),
            Err(TracerError::InvalidRadius(-1.0))
        );
        assert!(Sphere::new(center, f32::INFINITY, Color::ONE).is_err());
        assert!(Sphere::new(center, 1.0, Color::new(2.0, 0.0, 0.0)).is_err());
    }
}

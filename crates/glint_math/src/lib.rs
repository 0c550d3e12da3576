// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{normalize, reflect};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_color_is_vec3() {
        let c: Color = Color::new(0.25, 0.5, 1.0);
        assert_eq!(c * 2.0, Vec3::new(0.5, 1.0, 2.0));
    }
}

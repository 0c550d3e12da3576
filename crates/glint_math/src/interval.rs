/// A closed range of real values `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Linearly interpolate from min (t = 0) to max (t = 1).
    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + t * self.size()
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// The unit interval [0, 1], the valid range of color channels and
    /// material coefficients.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_size() {
        let interval = Interval::new(2.0, 7.0);
        assert_eq!(interval.size(), 5.0);

        let negative = Interval::new(-5.0, 5.0);
        assert_eq!(negative.size(), 10.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
        assert!(!interval.contains(f32::NAN));
    }

    #[test]
    fn test_interval_lerp() {
        let interval = Interval::new(-1.0, 1.0);

        assert_eq!(interval.lerp(0.0), -1.0);
        assert_eq!(interval.lerp(0.5), 0.0);
        assert_eq!(interval.lerp(1.0), 1.0);

        // Reversed bounds interpolate downward
        let reversed = Interval::new(1.0, -1.0);
        assert_eq!(reversed.lerp(0.25), 0.5);
    }

    #[test]
    fn test_unit_clamp() {
        assert_eq!(Interval::UNIT.clamp(-5.0), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.5), 0.5);
        assert_eq!(Interval::UNIT.clamp(1.5), 1.0);
    }

    #[test]
    fn test_unit_contains() {
        assert!(Interval::UNIT.contains(0.0));
        assert!(Interval::UNIT.contains(1.0));
        assert!(!Interval::UNIT.contains(1.0001));
    }
}

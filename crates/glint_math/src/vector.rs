//! Vector helpers shared by the tracer.

use crate::Vec3;

/// Scale `v` to unit length.
///
/// Returns `None` when the length is zero, too small to invert, or not
/// finite, so degenerate input never turns into NaNs downstream.
#[inline]
pub fn normalize(v: Vec3) -> Option<Vec3> {
    v.try_normalize()
}

/// Mirror `v` about the unit normal `n`: `v - 2 (v . n) n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

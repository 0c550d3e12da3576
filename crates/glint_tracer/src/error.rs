//! Errors raised while building or querying the scene.
//!
//! A ray that hits nothing is not an error: intersection routines return an
//! infinite distance instead. Everything here is a malformed input or a
//! broken caller contract, caught before or outside the per-pixel loop.

use glint_math::{Color, Vec3};
use thiserror::Error;

/// Errors produced by the tracer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TracerError {
    #[error("Degenerate triangle: vertices {0:?}, {1:?}, {2:?} are collinear")]
    DegenerateTriangle(Vec3, Vec3, Vec3),

    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Plane normal must be a non-zero finite vector, got {0:?}")]
    ZeroNormal(Vec3),

    #[error("Triangle strip needs at least 3 vertices, got {0}")]
    StripTooShort(usize),

    #[error("Color {0:?} has channels outside [0, 1]")]
    ColorOutOfRange(Color),

    #[error("Material coefficient {name} = {value} is outside [0, 1]")]
    CoefficientOutOfRange { name: &'static str, value: f32 },

    #[error("Non-finite {0} in scene input")]
    NonFinite(&'static str),

    #[error("Object {index} ({kind}): {source}")]
    InvalidObject {
        index: usize,
        kind: &'static str,
        #[source]
        source: Box<TracerError>,
    },

    #[error("No object with index {0} in the scene")]
    UnknownObject(usize),

    #[error("Triangle strip queried without a selected triangle")]
    NoFacetSelected,

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for tracer operations.
pub type TracerResult<T> = Result<T, TracerError>;

/// Reject NaN and infinite vector components.
pub(crate) fn ensure_finite(what: &'static str, v: Vec3) -> TracerResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(TracerError::NonFinite(what))
    }
}

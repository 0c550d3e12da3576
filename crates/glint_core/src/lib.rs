//! Glint Core - Scene description types for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `ObjectDescription`,
//!   `LightDescription`, `CameraDescription`, `RenderSettings`
//! - **JSON support**: scene file loading and saving
//! - **Reference scene**: the built-in checkered-floor scene
//!
//! The types here are renderer-agnostic plain data. Geometric validation
//! (degenerate triangles, zero normals, ...) happens when the tracer builds
//! its primitives from a description.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scenes/reference.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

pub mod loader;
pub mod reference;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, scene_to_json, LoadError, LoadResult};
pub use reference::reference_scene;
pub use scene::{
    CameraDescription, LightDescription, MaterialDescription, ObjectDescription, RenderSettings,
    SceneDescription, ScreenDescription,
};

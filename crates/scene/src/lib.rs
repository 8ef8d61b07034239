//! Scene description consumed by the renderers.
//!
//! # Invariants
//! - The scene is plain data. Cameras and renderers read it, never own it.

mod types;

pub use types::{PointLight, Scene, SceneObject, Transform};

pub fn crate_info() -> &'static str {
    "eyeline-scene v0.1.0"
}

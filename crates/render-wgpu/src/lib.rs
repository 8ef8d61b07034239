//! wgpu render backend.
//!
//! Draws a procedural gradient sky, a grid floor and the scene's cubes lit by
//! a point light plus a flashlight cone that follows the camera.
//!
//! # Invariants
//! - Renderer never mutates the scene or the camera.
//! - The sky is drawn through the translation-free view, so it stays at
//!   infinity however far the camera moves.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;

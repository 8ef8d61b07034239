//! Rendering adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read a scene and a [`RenderView`]; they never mutate either.
//! - A `RenderView` is captured once per frame after input has been applied,
//!   so every pass in a frame sees the same camera.

mod renderer;
mod view;

pub use renderer::{DebugTextRenderer, Renderer};
pub use view::RenderView;

pub fn crate_info() -> &'static str {
    "eyeline-render v0.1.0"
}

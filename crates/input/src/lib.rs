//! Input mapping: window events become [`Action`]s, actions accumulate in an
//! [`InputState`], and the state is applied to the camera once per frame.
//!
//! # Invariants
//! - The camera never sees raw window events, only movement/look/zoom intents.
//! - All per-frame input bookkeeping lives in `InputState`, owned by the loop.

pub mod action;
mod state;

pub use action::Action;
pub use state::{FrameIntent, InputState};

pub fn crate_info() -> &'static str {
    "eyeline-input v0.1.0"
}

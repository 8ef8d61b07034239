//! First-person camera controller.
//!
//! Converts movement, look and zoom intents into a view matrix and a vertical
//! field of view for a perspective projection.
//!
//! # Invariants
//! - `front`, `right`, `up` are orthonormal and derived from yaw, pitch and
//!   `world_up` on every orientation change. They are never set directly.
//! - Constrained pitch stays within [-89°, 89°]; zoom stays within [1°, 45°].
//! - Every operation is total: no operation returns an error or panics.

mod camera;
mod config;
mod projection;

pub use camera::{
    Basis, Camera, CameraMovement, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED,
    DEFAULT_YAW, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, PITCH_LIMIT,
};
pub use config::{CameraConfig, ConfigError};
pub use projection::{Projection, aspect_ratio};

pub fn crate_info() -> &'static str {
    "eyeline-camera v0.1.0"
}

//! Camera tuning loaded from JSON.
//!
//! Every field has a default, so a file only needs the values it overrides:
//! ```json
//! { "position": [0.0, 0.0, 3.0], "movement_speed": 5.0 }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{
    Camera, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW, DEFAULT_ZOOM,
    MAX_ZOOM, MIN_ZOOM, PITCH_LIMIT,
};
use crate::projection::Projection;

/// Errors from loading or validating a camera configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("zoom {0} is outside [1, 45] degrees")]
    ZoomOutOfRange(f32),
    #[error("pitch {0} is outside [-89, 89] degrees")]
    PitchOutOfRange(f32),
    #[error("world_up must be a non-zero vector")]
    ZeroWorldUp,
    #[error("invalid clip planes: near={near}, far={far}")]
    ClipPlanes { near: f32, far: f32 },
}

/// Initial camera state plus projection clip planes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub world_up: Vec3,
    /// Degrees. -90 looks down -Z.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    /// World units per second.
    pub movement_speed: f32,
    /// Degrees per pixel of pointer motion.
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
    pub constrain_pitch: bool,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let projection = Projection::default();
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            constrain_pitch: true,
            near: projection.near,
            far: projection.far,
        }
    }
}

impl CameraConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded camera config");
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_vectors = [("position", self.position), ("world_up", self.world_up)];
        for (field, v) in finite_vectors {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        let scalars = [
            ("yaw", self.yaw),
            ("pitch", self.pitch),
            ("movement_speed", self.movement_speed),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("zoom", self.zoom),
            ("near", self.near),
            ("far", self.far),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        if self.movement_speed <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "movement_speed",
                value: self.movement_speed,
            });
        }
        if self.mouse_sensitivity <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "mouse_sensitivity",
                value: self.mouse_sensitivity,
            });
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(ConfigError::ZoomOutOfRange(self.zoom));
        }
        if self.constrain_pitch && self.pitch.abs() > PITCH_LIMIT {
            return Err(ConfigError::PitchOutOfRange(self.pitch));
        }
        if self.world_up.length_squared() == 0.0 {
            return Err(ConfigError::ZeroWorldUp);
        }
        if self.near <= 0.0 || self.far <= self.near {
            return Err(ConfigError::ClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }

    pub fn build_camera(&self) -> Camera {
        Camera::new(self.position, self.world_up, self.yaw, self.pitch)
            .with_movement_speed(self.movement_speed)
            .with_mouse_sensitivity(self.mouse_sensitivity)
            .with_zoom(self.zoom)
    }

    pub fn projection(&self) -> Projection {
        Projection::new(self.near, self.far)
    }
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        config.build_camera()
    }
}

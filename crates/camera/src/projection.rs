use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Clip planes for a perspective projection. The field of view comes from
/// the camera's zoom and the aspect ratio from the viewport, per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn new(near: f32, far: f32) -> Self {
        Self { near, far }
    }

    /// Right-handed perspective matrix with a 0..1 depth range.
    ///
    /// A non-positive or non-finite `aspect` is replaced with 1.
    pub fn matrix(&self, fov_degrees: f32, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Mat4::perspective_rh(fov_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// Width over height, or 1 for an empty viewport (minimized window).
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

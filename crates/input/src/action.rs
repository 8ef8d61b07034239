use eyeline_camera::CameraMovement;
use serde::{Deserialize, Serialize};

/// A high-level input intent. Window backends and scripts both produce these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// A movement key went down.
    StartMove(CameraMovement),
    /// A movement key went up.
    StopMove(CameraMovement),
    /// Relative pointer motion in pixels (raw device motion, y down).
    Look { dx: f32, dy: f32 },
    /// Absolute cursor position in window pixels.
    CursorMoved { x: f32, y: f32 },
    /// Scroll wheel offset. Positive narrows the field of view.
    Zoom(f32),
    /// Multiply movement by the sprint factor while held.
    Sprint(bool),
    SetCapture(bool),
    ToggleCapture,
    Exit,
    /// Unbound input.
    Noop,
}

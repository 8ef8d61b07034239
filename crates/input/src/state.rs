use eyeline_camera::{Camera, CameraMovement};
use glam::Vec2;

use crate::action::Action;

const DEFAULT_SPRINT_MULTIPLIER: f32 = 3.0;

/// What `InputState::apply` fed into the camera this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameIntent {
    pub movements: Vec<CameraMovement>,
    /// Camera-space look offset in pixels (positive y looks up).
    pub look: Vec2,
    pub scroll: f32,
}

impl FrameIntent {
    pub fn is_idle(&self) -> bool {
        self.movements.is_empty() && self.look == Vec2::ZERO && self.scroll == 0.0
    }
}

/// Per-window input bookkeeping.
///
/// Pointer motion only turns the camera while the pointer is captured. The
/// first absolute cursor sample after a capture change only seeds the last
/// position, so the camera does not jump toward wherever the cursor entered.
#[derive(Debug, Clone)]
pub struct InputState {
    held: [bool; 4],
    captured: bool,
    sprinting: bool,
    sprint_multiplier: f32,
    constrain_pitch: bool,
    last_cursor: Option<Vec2>,
    pending_look: Vec2,
    pending_scroll: f32,
    exit_requested: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            held: [false; 4],
            captured: false,
            sprinting: false,
            sprint_multiplier: DEFAULT_SPRINT_MULTIPLIER,
            constrain_pitch: true,
            last_cursor: None,
            pending_look: Vec2::ZERO,
            pending_scroll: 0.0,
            exit_requested: false,
        }
    }
}

fn slot(direction: CameraMovement) -> usize {
    match direction {
        CameraMovement::Forward => 0,
        CameraMovement::Backward => 1,
        CameraMovement::Left => 2,
        CameraMovement::Right => 3,
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capture(mut self, captured: bool) -> Self {
        self.captured = captured;
        self
    }

    pub fn with_constrain_pitch(mut self, constrain_pitch: bool) -> Self {
        self.constrain_pitch = constrain_pitch;
        self
    }

    pub fn with_sprint_multiplier(mut self, multiplier: f32) -> Self {
        self.sprint_multiplier = multiplier;
        self
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn is_held(&self, direction: CameraMovement) -> bool {
        self.held[slot(direction)]
    }

    /// Record one action. Returns true if pointer capture changed, so the
    /// window backend can grab or release the cursor.
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::StartMove(direction) => self.held[slot(direction)] = true,
            Action::StopMove(direction) => self.held[slot(direction)] = false,
            Action::Look { dx, dy } => {
                if self.captured {
                    self.pending_look += Vec2::new(dx, -dy);
                }
            }
            Action::CursorMoved { x, y } => {
                let cursor = Vec2::new(x, y);
                if self.captured {
                    if let Some(last) = self.last_cursor {
                        // screen y grows downward
                        self.pending_look += Vec2::new(cursor.x - last.x, last.y - cursor.y);
                    }
                }
                self.last_cursor = Some(cursor);
            }
            Action::Zoom(delta) => self.pending_scroll += delta,
            Action::Sprint(on) => self.sprinting = on,
            Action::SetCapture(on) => return self.set_capture(on),
            Action::ToggleCapture => return self.set_capture(!self.captured),
            Action::Exit => {
                tracing::info!("exit requested");
                self.exit_requested = true;
            }
            Action::Noop => {}
        }
        false
    }

    fn set_capture(&mut self, on: bool) -> bool {
        if self.captured == on {
            return false;
        }
        self.captured = on;
        self.last_cursor = None;
        self.pending_look = Vec2::ZERO;
        tracing::debug!(captured = on, "pointer capture changed");
        true
    }

    /// Release every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held = [false; 4];
        self.sprinting = false;
    }

    /// Feed this frame's input into `camera`: held movement scaled by `dt`,
    /// then the accumulated look and zoom. Accumulators are cleared.
    pub fn apply(&mut self, camera: &mut Camera, dt: f32) -> FrameIntent {
        let dt = if self.sprinting {
            dt * self.sprint_multiplier
        } else {
            dt
        };

        let mut intent = FrameIntent::default();
        for direction in CameraMovement::ALL {
            if self.held[slot(direction)] {
                camera.apply_movement(direction, dt);
                intent.movements.push(direction);
            }
        }

        let look = std::mem::take(&mut self.pending_look);
        if look != Vec2::ZERO {
            camera.apply_look_with_constraint(look.x, look.y, self.constrain_pitch);
            intent.look = look;
        }

        let scroll = std::mem::take(&mut self.pending_scroll);
        if scroll != 0.0 {
            camera.apply_zoom(scroll);
            intent.scroll = scroll;
        }

        if !intent.is_idle() {
            tracing::trace!(?intent, position = ?camera.position(), "applied frame input");
        }
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyeline_camera::{DEFAULT_SPEED, MAX_ZOOM, PITCH_LIMIT};
    use glam::Vec3;

    fn camera() -> Camera {
        Camera::at(Vec3::new(0.0, 0.0, 3.0))
    }

    #[test]
    fn held_forward_moves_every_frame() {
        let mut input = InputState::new();
        let mut cam = camera();
        input.handle(Action::StartMove(CameraMovement::Forward));
        input.apply(&mut cam, 0.5);
        input.apply(&mut cam, 0.5);
        assert!((cam.position().z - (3.0 - DEFAULT_SPEED)).abs() < 1e-5);

        input.handle(Action::StopMove(CameraMovement::Forward));
        let before = cam.position();
        let intent = input.apply(&mut cam, 0.5);
        assert!(intent.is_idle());
        assert_eq!(cam.position(), before);
    }

    #[test]
    fn sprint_scales_movement() {
        let mut input = InputState::new().with_sprint_multiplier(2.0);
        let mut cam = camera();
        input.handle(Action::StartMove(CameraMovement::Backward));
        input.handle(Action::Sprint(true));
        input.apply(&mut cam, 1.0);
        assert!((cam.position().z - (3.0 + 2.0 * DEFAULT_SPEED)).abs() < 1e-4);
    }

    #[test]
    fn look_ignored_until_captured() {
        let mut input = InputState::new();
        let mut cam = camera();
        input.handle(Action::Look { dx: 100.0, dy: 0.0 });
        assert!(input.apply(&mut cam, 0.016).is_idle());

        assert!(input.handle(Action::ToggleCapture));
        assert!(input.is_captured());
        input.handle(Action::Look { dx: 100.0, dy: 50.0 });
        let intent = input.apply(&mut cam, 0.016);
        assert_eq!(intent.look, Vec2::new(100.0, -50.0));
        assert!((cam.yaw() - (-80.0)).abs() < 1e-4);
        // pointer moving down looks down
        assert!((cam.pitch() - (-5.0)).abs() < 1e-4);
    }

    #[test]
    fn first_cursor_sample_does_not_turn_camera() {
        let mut input = InputState::new().with_capture(true);
        let mut cam = camera();
        input.handle(Action::CursorMoved { x: 400.0, y: 300.0 });
        assert!(input.apply(&mut cam, 0.016).is_idle());

        input.handle(Action::CursorMoved { x: 410.0, y: 280.0 });
        let intent = input.apply(&mut cam, 0.016);
        assert_eq!(intent.look, Vec2::new(10.0, 20.0));
        assert!(cam.pitch() > 0.0);
    }

    #[test]
    fn recapture_reseeds_cursor() {
        let mut input = InputState::new().with_capture(true);
        let mut cam = camera();
        input.handle(Action::CursorMoved { x: 0.0, y: 0.0 });
        input.handle(Action::SetCapture(false));
        input.handle(Action::SetCapture(true));
        input.handle(Action::CursorMoved { x: 500.0, y: 500.0 });
        assert!(input.apply(&mut cam, 0.016).is_idle());
    }

    #[test]
    fn set_capture_reports_changes_only() {
        let mut input = InputState::new();
        assert!(!input.handle(Action::SetCapture(false)));
        assert!(input.handle(Action::SetCapture(true)));
        assert!(!input.handle(Action::SetCapture(true)));
    }

    #[test]
    fn look_respects_pitch_constraint_setting() {
        let mut cam = camera();
        let mut input = InputState::new().with_capture(true);
        input.handle(Action::Look { dx: 0.0, dy: -5_000.0 });
        input.apply(&mut cam, 0.016);
        assert_eq!(cam.pitch(), PITCH_LIMIT);

        let mut cam = camera();
        let mut input = InputState::new()
            .with_capture(true)
            .with_constrain_pitch(false);
        input.handle(Action::Look { dx: 0.0, dy: -1_000.0 });
        input.apply(&mut cam, 0.016);
        assert!(cam.pitch() > PITCH_LIMIT);
    }

    #[test]
    fn scroll_accumulates_then_clears() {
        let mut input = InputState::new();
        let mut cam = camera();
        input.handle(Action::Zoom(5.0));
        input.handle(Action::Zoom(5.0));
        let intent = input.apply(&mut cam, 0.016);
        assert_eq!(intent.scroll, 10.0);
        assert_eq!(cam.zoom(), MAX_ZOOM - 10.0);
        assert!(input.apply(&mut cam, 0.016).is_idle());
    }

    #[test]
    fn release_all_clears_held_keys() {
        let mut input = InputState::new();
        for direction in CameraMovement::ALL {
            input.handle(Action::StartMove(direction));
        }
        assert!(input.is_held(CameraMovement::Left));
        input.release_all();
        assert!(CameraMovement::ALL.iter().all(|d| !input.is_held(*d)));
    }

    #[test]
    fn exit_is_latched() {
        let mut input = InputState::new();
        assert!(!input.exit_requested());
        input.handle(Action::Noop);
        input.handle(Action::Exit);
        assert!(input.exit_requested());
    }
}

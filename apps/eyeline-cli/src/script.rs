//! Scripted input: a JSON list of frames, each with a time step and the
//! actions delivered before that frame is applied.
//!
//! ```json
//! {
//!   "capture": true,
//!   "frames": [
//!     { "dt": 0.5, "actions": [{ "start_move": "forward" }] },
//!     { "dt": 0.5, "actions": [{ "stop_move": "forward" }, { "look": { "dx": 100.0, "dy": 0.0 } }] }
//!   ]
//! }
//! ```

use std::path::Path;

use eyeline_camera::{Camera, CameraMovement};
use eyeline_input::{Action, InputState};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("frame {frame}: dt must be finite and non-negative, got {dt}")]
    InvalidDt { frame: usize, dt: f32 },
    #[error("frame {frame}: repeat must be at most 100000, got {repeat}")]
    RepeatTooLarge { frame: usize, repeat: u32 },
}

/// Upper bound on a single frame's `repeat`.
pub const MAX_REPEAT: u32 = 100_000;

fn default_dt() -> f32 {
    1.0 / 60.0
}

fn default_repeat() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Apply this frame's step this many times; actions are delivered once.
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Start with the pointer captured so look actions take effect.
    #[serde(default = "default_capture")]
    pub capture: bool,
    pub frames: Vec<ScriptFrame>,
}

fn default_capture() -> bool {
    true
}

/// Outcome of running a script.
#[derive(Debug)]
pub struct RunReport {
    pub frames_applied: usize,
    pub elapsed: f32,
    pub exited_early: bool,
    /// Applied frames that carried no movement, look or zoom.
    pub idle_frames: usize,
}

impl Script {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_json::from_str(text)?;
        for (frame, f) in script.frames.iter().enumerate() {
            if !f.dt.is_finite() || f.dt < 0.0 {
                return Err(ScriptError::InvalidDt { frame, dt: f.dt });
            }
            if f.repeat > MAX_REPEAT {
                return Err(ScriptError::RepeatTooLarge {
                    frame,
                    repeat: f.repeat,
                });
            }
        }
        Ok(script)
    }

    /// Walk forward one second, turn right 90°, strafe, look up, zoom in.
    pub fn demo() -> Self {
        let frame = |dt: f32, actions: Vec<Action>, repeat: u32| ScriptFrame {
            dt,
            actions,
            repeat,
        };
        Self {
            capture: true,
            frames: vec![
                frame(
                    1.0 / 60.0,
                    vec![Action::StartMove(CameraMovement::Forward)],
                    60,
                ),
                frame(
                    1.0 / 60.0,
                    vec![
                        Action::StopMove(CameraMovement::Forward),
                        Action::Look { dx: 900.0, dy: 0.0 },
                    ],
                    1,
                ),
                frame(
                    1.0 / 60.0,
                    vec![Action::StartMove(CameraMovement::Left)],
                    30,
                ),
                frame(
                    1.0 / 60.0,
                    vec![
                        Action::StopMove(CameraMovement::Left),
                        Action::Look { dx: 0.0, dy: -200.0 },
                        Action::Zoom(15.0),
                    ],
                    1,
                ),
            ],
        }
    }

    /// Drive `camera` through every frame. Stops early on an exit action.
    pub fn run(&self, camera: &mut Camera, constrain_pitch: bool) -> RunReport {
        self.run_observed(camera, constrain_pitch, |_, _| {})
    }

    /// Like [`Script::run`], calling `observe` after each applied frame with
    /// the frame index and the updated camera.
    pub fn run_observed(
        &self,
        camera: &mut Camera,
        constrain_pitch: bool,
        mut observe: impl FnMut(usize, &Camera),
    ) -> RunReport {
        let mut input = InputState::new()
            .with_capture(self.capture)
            .with_constrain_pitch(constrain_pitch);
        let mut report = RunReport {
            frames_applied: 0,
            elapsed: 0.0,
            exited_early: false,
            idle_frames: 0,
        };

        for (i, frame) in self.frames.iter().enumerate() {
            for action in &frame.actions {
                input.handle(*action);
            }
            if input.exit_requested() {
                tracing::info!(frame = i, "script requested exit");
                report.exited_early = true;
                break;
            }
            for _ in 0..frame.repeat {
                let intent = input.apply(camera, frame.dt);
                observe(report.frames_applied, camera);
                report.frames_applied += 1;
                report.elapsed += frame.dt;
                if intent.is_idle() {
                    report.idle_frames += 1;
                }
            }
        }
        tracing::debug!(
            frames = report.frames_applied,
            elapsed = report.elapsed,
            "script finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyeline_camera::DEFAULT_SPEED;
    use glam::Vec3;

    #[test]
    fn parses_minimal_script_with_defaults() {
        let script = Script::from_json_str(r#"{ "frames": [ {} ] }"#).unwrap();
        assert!(script.capture);
        assert_eq!(script.frames[0].dt, 1.0 / 60.0);
        assert_eq!(script.frames[0].repeat, 1);
        assert!(script.frames[0].actions.is_empty());
    }

    #[test]
    fn rejects_negative_dt() {
        let err = Script::from_json_str(r#"{ "frames": [ { "dt": 0.1 }, { "dt": -1.0 } ] }"#)
            .unwrap_err();
        assert!(matches!(err, ScriptError::InvalidDt { frame: 1, .. }));
    }

    #[test]
    fn forward_script_moves_camera() {
        let script = Script::from_json_str(
            r#"{ "frames": [
                { "dt": 0.5, "actions": [{ "start_move": "forward" }], "repeat": 2 },
                { "dt": 0.5, "actions": [{ "stop_move": "forward" }] }
            ] }"#,
        )
        .unwrap();
        let mut camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let report = script.run(&mut camera, true);
        assert_eq!(report.frames_applied, 3);
        assert!((report.elapsed - 1.5).abs() < 1e-6);
        assert!((camera.position().z - (3.0 - DEFAULT_SPEED)).abs() < 1e-4);
        assert_eq!(report.idle_frames, 1);
    }

    #[test]
    fn rejects_oversized_repeat() {
        let err = Script::from_json_str(r#"{ "frames": [ { "repeat": 4294967295 } ] }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ScriptError::RepeatTooLarge {
                frame: 0,
                repeat: u32::MAX
            }
        ));

        let text = format!(r#"{{ "frames": [ {{ "repeat": {MAX_REPEAT} }} ] }}"#);
        assert!(Script::from_json_str(&text).is_ok());
    }

    #[test]
    fn exit_stops_script() {
        let script = Script::from_json_str(
            r#"{ "frames": [
                { "actions": [{ "start_move": "right" }] },
                { "actions": ["exit"] },
                { "repeat": 100 }
            ] }"#,
        )
        .unwrap();
        let mut camera = Camera::default();
        let report = script.run(&mut camera, true);
        assert!(report.exited_early);
        assert_eq!(report.frames_applied, 1);
    }

    #[test]
    fn observer_sees_every_applied_frame() {
        let script = Script::from_json_str(r#"{ "frames": [ { "repeat": 3 }, { "dt": 0.0 } ] }"#)
            .unwrap();
        let mut seen = Vec::new();
        script.run_observed(&mut Camera::default(), true, |i, _| seen.push(i));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn demo_script_turns_and_zooms() {
        let mut camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        Script::demo().run(&mut camera, true);
        assert!((camera.yaw() - 0.0).abs() < 1e-3);
        assert!((camera.pitch() - 20.0).abs() < 1e-3);
        assert_eq!(camera.zoom(), 30.0);
        assert!(camera.position().z < 3.0);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        let text = serde_json::to_string(&Script::demo()).unwrap();
        std::fs::write(&path, text).unwrap();
        assert_eq!(Script::load(&path).unwrap(), Script::demo());
    }
}

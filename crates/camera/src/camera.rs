use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::projection::Projection;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch bound in degrees. Going past it flips the basis through the pole.
pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Squared length under which `front x world_up` is treated as zero. Only
/// reached within float noise of the pole.
const DEGENERATE_CROSS_EPSILON: f32 = 1e-12;

/// Movement intent, independent of any windowing system's key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

impl CameraMovement {
    pub const ALL: [CameraMovement; 4] = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
    ];
}

/// Orthonormal camera frame derived from Euler angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    /// True when `front` was parallel to `world_up` and a secondary axis was used.
    pub degenerate: bool,
}

impl Basis {
    /// Compute the frame for `yaw`/`pitch` (degrees) against `world_up`.
    ///
    /// When `front` is parallel to `world_up` the right vector is taken from
    /// the level (pitch 0) front at the same yaw, the limit of the regular
    /// case as pitch approaches the pole. If that is parallel too (zero
    /// `world_up`), the world axis least aligned with `front` is used.
    pub fn from_euler(yaw: f32, pitch: f32, world_up: Vec3) -> Self {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();

        let cross = front.cross(world_up);
        let (right, degenerate) = if cross.length_squared() > DEGENERATE_CROSS_EPSILON {
            (cross.normalize(), false)
        } else {
            let level = Vec3::new(yaw.cos(), 0.0, yaw.sin()).cross(world_up);
            if level.length_squared() > DEGENERATE_CROSS_EPSILON {
                (level.normalize(), true)
            } else {
                (front.cross(least_aligned_axis(front)).normalize(), true)
            }
        };
        let up = right.cross(front).normalize();

        Self {
            front,
            right,
            up,
            degenerate,
        }
    }
}

fn least_aligned_axis(v: Vec3) -> Vec3 {
    let a = v.abs();
    if a.x <= a.y && a.x <= a.z {
        Vec3::X
    } else if a.y <= a.z {
        Vec3::Y
    } else {
        Vec3::Z
    }
}

/// Euler-angle fly camera.
///
/// Orientation is stored as yaw/pitch in degrees. The basis vectors are
/// rebuilt from the angles after every orientation change, so there is no
/// drift from incremental rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    degenerate: bool,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Camera {
    /// Create a camera at `position` looking along the direction given by
    /// `yaw`/`pitch` (degrees), with `world_up` as the roll-free reference.
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up,
            degenerate: false,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        if camera.update_camera_vectors() {
            tracing::warn!(
                ?world_up,
                yaw,
                pitch,
                "camera front is parallel to world_up, using a secondary reference axis"
            );
        }
        camera
    }

    /// Scalar form of [`Camera::new`], one argument per vector component.
    #[allow(clippy::too_many_arguments)]
    pub fn from_scalars(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    /// Default orientation and up vector at `position`.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Ignored unless finite and positive, as for [`Camera::set_movement_speed`].
    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.set_movement_speed(speed);
        self
    }

    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.set_mouse_sensitivity(sensitivity);
        self
    }

    /// Set the initial field of view, clamped to [`MIN_ZOOM`, `MAX_ZOOM`].
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn basis(&self) -> Basis {
        Basis {
            front: self.front,
            right: self.right,
            up: self.up,
            degenerate: self.degenerate,
        }
    }

    /// Teleport. The orientation is left untouched.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Units per second. Non-finite or non-positive values are ignored.
    pub fn set_movement_speed(&mut self, speed: f32) {
        if !is_positive_finite(speed) {
            tracing::debug!(speed, "ignoring invalid movement speed");
            return;
        }
        self.movement_speed = speed;
    }

    /// Degrees per pixel. Non-finite or non-positive values are ignored.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        if !is_positive_finite(sensitivity) {
            tracing::debug!(sensitivity, "ignoring invalid mouse sensitivity");
            return;
        }
        self.mouse_sensitivity = sensitivity;
    }

    /// Replace yaw and pitch outright. Pitch is clamped to the pole limit.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        if !(yaw.is_finite() && pitch.is_finite()) {
            tracing::debug!(yaw, pitch, "ignoring non-finite orientation");
            return;
        }
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_camera_vectors();
    }

    /// Look-at transform from `position` toward `position + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// View matrix with the translation stripped, for drawing a sky that
    /// stays at infinity.
    pub fn skybox_view_matrix(&self) -> Mat4 {
        Mat4::from_mat3(Mat3::from_mat4(self.view_matrix()))
    }

    pub fn projection_matrix(&self, projection: &Projection, aspect: f32) -> Mat4 {
        projection.matrix(self.zoom, aspect)
    }

    pub fn view_projection(&self, projection: &Projection, aspect: f32) -> Mat4 {
        self.projection_matrix(projection, aspect) * self.view_matrix()
    }

    /// Move along `front` or `right` by `movement_speed * dt`.
    ///
    /// Forward and backward follow the full 3D front vector, so a pitched
    /// camera also climbs or sinks. Position is unbounded.
    pub fn apply_movement(&mut self, direction: CameraMovement, dt: f32) {
        if !dt.is_finite() {
            tracing::debug!(dt, "ignoring non-finite frame delta");
            return;
        }
        let velocity = self.movement_speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a pointer offset with the pitch constrained to the pole limit.
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        self.apply_look_with_constraint(dx, dy, true);
    }

    /// Apply a pointer offset in pixels. Positive `dy` looks up.
    ///
    /// Yaw accumulates without wrapping; only its sine and cosine are used.
    pub fn apply_look_with_constraint(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        if !(dx.is_finite() && dy.is_finite()) {
            tracing::debug!(dx, dy, "ignoring non-finite look offset");
            return;
        }
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        if self.update_camera_vectors() {
            tracing::debug!(
                yaw = self.yaw,
                pitch = self.pitch,
                "front parallel to world_up, basis built from secondary axis"
            );
        }
    }

    /// Narrow (positive delta) or widen the field of view.
    pub fn apply_zoom(&mut self, scroll_delta: f32) {
        if !scroll_delta.is_finite() {
            tracing::debug!(scroll_delta, "ignoring non-finite scroll");
            return;
        }
        self.zoom = (self.zoom - scroll_delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Rebuild the basis from the angles. Returns true if the degenerate
    /// fallback was used.
    fn update_camera_vectors(&mut self) -> bool {
        let basis = Basis::from_euler(self.yaw, self.pitch, self.world_up);
        self.front = basis.front;
        self.right = basis.right;
        self.up = basis.up;
        self.degenerate = basis.degenerate;
        basis.degenerate
    }
}

fn is_positive_finite(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn assert_orthonormal(b: &Basis) {
        assert!(approx_eq(b.front.length(), 1.0), "front {:?}", b.front);
        assert!(approx_eq(b.right.length(), 1.0), "right {:?}", b.right);
        assert!(approx_eq(b.up.length(), 1.0), "up {:?}", b.up);
        assert!(b.front.dot(b.right).abs() < EPS);
        assert!(b.front.dot(b.up).abs() < EPS);
        assert!(b.right.dot(b.up).abs() < EPS);
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = Camera::default();
        assert_eq!(cam.position(), Vec3::ZERO);
        assert_eq!(cam.world_up(), Vec3::Y);
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(cam.right().abs_diff_eq(Vec3::X, EPS));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(cam.zoom(), DEFAULT_ZOOM);
        assert_eq!(cam.movement_speed(), DEFAULT_SPEED);
        assert_eq!(cam.mouse_sensitivity(), DEFAULT_SENSITIVITY);
    }

    #[test]
    fn scalar_constructor_matches_vector_constructor() {
        let a = Camera::from_scalars(1.0, 2.0, 3.0, 0.0, 1.0, 0.0, -45.0, 10.0);
        let b = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -45.0, 10.0);
        assert_eq!(a, b);
    }

    #[test]
    fn basis_is_orthonormal_over_yaw_and_pitch() {
        for yaw in (0..360).step_by(5) {
            for pitch in (-88..=88).step_by(4) {
                let basis = Basis::from_euler(yaw as f32, pitch as f32, Vec3::Y);
                assert!(!basis.degenerate);
                assert_orthonormal(&basis);
            }
        }
    }

    #[test]
    fn camera_basis_matches_angles_after_look() {
        let mut cam = Camera::default();
        cam.apply_look(120.0, -75.0);
        let expected = Basis::from_euler(cam.yaw(), cam.pitch(), Vec3::Y);
        assert_eq!(cam.front(), expected.front);
        assert_eq!(cam.right(), expected.right);
        assert_eq!(cam.up(), expected.up);
        assert_orthonormal(&cam.basis());
    }

    #[test]
    fn constrained_pitch_never_leaves_limit() {
        let mut cam = Camera::default();
        // single step far past the pole
        cam.apply_look(0.0, 10_000.0);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        cam.apply_look(0.0, -50_000.0);
        assert_eq!(cam.pitch(), -PITCH_LIMIT);

        let deltas = [37.0, 412.0, -913.0, 5.5, 880.0, -1.0, 2000.0, -4000.0];
        for (i, dy) in deltas.iter().cycle().take(200).enumerate() {
            cam.apply_look(i as f32, *dy);
            assert!(cam.pitch() >= -PITCH_LIMIT && cam.pitch() <= PITCH_LIMIT);
            assert_orthonormal(&cam.basis());
        }
    }

    #[test]
    fn unconstrained_pitch_may_exceed_limit() {
        let mut cam = Camera::default();
        cam.apply_look_with_constraint(0.0, 1_000.0, false);
        assert!(approx_eq(cam.pitch(), 100.0));
        assert_orthonormal(&cam.basis());
    }

    #[test]
    fn yaw_is_not_wrapped() {
        let mut cam = Camera::default();
        cam.apply_look(7200.0, 0.0);
        assert!((cam.yaw() - (DEFAULT_YAW + 720.0)).abs() < 1e-3);
        // 720 degrees later the camera faces the same way
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn zoom_stays_in_range() {
        let mut cam = Camera::default();
        cam.apply_zoom(-10.0);
        assert_eq!(cam.zoom(), MAX_ZOOM);
        cam.apply_zoom(30.0);
        assert_eq!(cam.zoom(), 15.0);
        cam.apply_zoom(1_000.0);
        assert_eq!(cam.zoom(), MIN_ZOOM);
        for delta in [3.0, -7.5, 12.0, -100.0, 0.25, 44.0, -0.5] {
            cam.apply_zoom(delta);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&cam.zoom()));
        }
    }

    #[test]
    fn non_finite_inputs_are_ignored() {
        let mut cam = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let before = cam.clone();
        cam.apply_zoom(f32::NAN);
        cam.apply_look(f32::INFINITY, 0.0);
        cam.apply_movement(CameraMovement::Forward, f32::NAN);
        cam.set_orientation(f32::NAN, 0.0);
        assert_eq!(cam, before);
    }

    #[test]
    fn invalid_speed_and_sensitivity_are_ignored() {
        let mut cam = Camera::default()
            .with_movement_speed(f32::NAN)
            .with_mouse_sensitivity(-1.0);
        assert_eq!(cam.movement_speed(), DEFAULT_SPEED);
        assert_eq!(cam.mouse_sensitivity(), DEFAULT_SENSITIVITY);

        cam.set_mouse_sensitivity(f32::INFINITY);
        cam.set_movement_speed(0.0);
        cam.set_movement_speed(f32::NEG_INFINITY);
        assert_eq!(cam.mouse_sensitivity(), DEFAULT_SENSITIVITY);
        assert_eq!(cam.movement_speed(), DEFAULT_SPEED);

        cam.apply_look(1.0, 0.0);
        assert!(cam.pitch().is_finite() && cam.yaw().is_finite());
        cam.apply_movement(CameraMovement::Forward, 1.0);
        assert!(cam.position().is_finite());
        assert!(!cam.view_matrix().is_nan());

        cam.set_movement_speed(5.0);
        cam.set_mouse_sensitivity(0.2);
        assert_eq!(cam.movement_speed(), 5.0);
        assert_eq!(cam.mouse_sensitivity(), 0.2);
    }

    #[test]
    fn view_matrix_matches_reference_look_at() {
        let cam = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let expected = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::Y,
        );
        assert!(cam.view_matrix().abs_diff_eq(expected, EPS));

        // the eye maps to the view-space origin
        let eye = cam.view_matrix().transform_point3(cam.position());
        assert!(eye.abs_diff_eq(Vec3::ZERO, EPS));
    }

    #[test]
    fn view_matrix_is_idempotent() {
        let mut cam = Camera::at(Vec3::new(1.0, 2.0, 3.0));
        cam.apply_look(33.0, -12.0);
        let a = cam.view_matrix();
        let b = cam.view_matrix();
        assert_eq!(a.to_cols_array(), b.to_cols_array());
    }

    #[test]
    fn forward_movement_decreases_z() {
        let mut cam = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let dt = 0.5;
        cam.apply_movement(CameraMovement::Forward, dt);
        let p = cam.position();
        assert!(approx_eq(p.z, 3.0 - DEFAULT_SPEED * dt));
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, 0.0));
    }

    #[test]
    fn opposite_movements_cancel() {
        let mut cam = Camera::at(Vec3::new(4.0, 1.0, -2.0));
        cam.apply_look(100.0, 40.0);
        let start = cam.position();
        cam.apply_movement(CameraMovement::Left, 0.3);
        cam.apply_movement(CameraMovement::Forward, 0.7);
        cam.apply_movement(CameraMovement::Right, 0.3);
        cam.apply_movement(CameraMovement::Backward, 0.7);
        assert!(cam.position().abs_diff_eq(start, 1e-4));
    }

    #[test]
    fn pitched_forward_movement_climbs() {
        let mut cam = Camera::default();
        cam.set_orientation(DEFAULT_YAW, 45.0);
        cam.apply_movement(CameraMovement::Forward, 1.0);
        assert!(cam.position().y > 0.0);
    }

    #[test]
    fn strafe_moves_along_right() {
        let mut cam = Camera::default().with_movement_speed(4.0);
        cam.apply_movement(CameraMovement::Right, 0.25);
        assert!(cam.position().abs_diff_eq(Vec3::X, EPS));
        cam.apply_movement(CameraMovement::Left, 0.5);
        assert!(cam.position().abs_diff_eq(Vec3::NEG_X, EPS));
    }

    #[test]
    fn net_zero_look_restores_orientation() {
        let mut cam = Camera::default();
        let start = cam.clone();
        let deltas = [(12.0, 5.0), (-3.0, 20.0), (40.0, -8.0), (-49.0, -17.0)];
        for (dx, dy) in deltas {
            cam.apply_look(dx, dy);
        }
        assert!((cam.yaw() - start.yaw()).abs() < 1e-4);
        assert!((cam.pitch() - start.pitch()).abs() < 1e-4);
        assert!(cam.front().abs_diff_eq(start.front(), EPS));
        assert!(cam.right().abs_diff_eq(start.right(), EPS));
        assert!(cam.up().abs_diff_eq(start.up(), EPS));
    }

    #[test]
    fn degenerate_world_up_falls_back_to_secondary_axis() {
        let basis = Basis::from_euler(0.0, 90.0, Vec3::Y);
        assert!(basis.degenerate);
        assert!(!basis.right.is_nan());
        assert_orthonormal(&basis);

        let cam = Camera::new(Vec3::ZERO, Vec3::ZERO, DEFAULT_YAW, DEFAULT_PITCH);
        assert!(!cam.view_matrix().is_nan());
        assert!(cam.basis().degenerate);
        assert_orthonormal(&cam.basis());
    }

    #[test]
    fn camera_reports_degenerate_basis() {
        let mut cam = Camera::new(Vec3::ZERO, Vec3::Y, 0.0, 90.0);
        assert!(cam.basis().degenerate);
        assert_orthonormal(&cam.basis());

        cam.set_orientation(0.0, 10.0);
        assert!(!cam.basis().degenerate);
        assert!(!Camera::default().basis().degenerate);
    }

    #[test]
    fn right_is_continuous_approaching_the_pole() {
        for yaw in [DEFAULT_YAW, 0.0, 37.0, 135.0] {
            let level = Basis::from_euler(yaw, 0.0, Vec3::Y).right;
            for pitch in [89.0, 89.99, 89.995, 89.999, 90.0] {
                let basis = Basis::from_euler(yaw, pitch, Vec3::Y);
                assert!(
                    basis.right.abs_diff_eq(level, 1e-4),
                    "yaw {yaw} pitch {pitch}: {:?} vs {:?}",
                    basis.right,
                    level
                );
                assert_orthonormal(&basis);
            }
        }
        assert!(!Basis::from_euler(0.0, 89.999, Vec3::Y).degenerate);
    }

    #[test]
    fn small_look_near_pole_does_not_roll() {
        let mut cam = Camera::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, 89.99);
        let before = cam.right();
        cam.apply_look_with_constraint(0.0, 0.09, false);
        assert!(cam.right().abs_diff_eq(before, 1e-4));
        cam.apply_look_with_constraint(0.0, 0.01, false);
        assert!(cam.right().abs_diff_eq(before, 1e-4));
    }

    #[test]
    fn unconstrained_look_through_pole_stays_finite() {
        let mut cam = Camera::default();
        cam.apply_look_with_constraint(0.0, 900.0, false);
        assert!(approx_eq(cam.pitch(), 90.0));
        assert!(!cam.view_matrix().is_nan());
        assert_orthonormal(&cam.basis());
    }

    #[test]
    fn set_orientation_clamps_pitch() {
        let mut cam = Camera::default();
        cam.set_orientation(10.0, 120.0);
        assert_eq!(cam.yaw(), 10.0);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
    }

    #[test]
    fn with_zoom_clamps() {
        assert_eq!(Camera::default().with_zoom(90.0).zoom(), MAX_ZOOM);
        assert_eq!(Camera::default().with_zoom(0.0).zoom(), MIN_ZOOM);
        assert_eq!(Camera::default().with_zoom(30.0).zoom(), 30.0);
    }

    #[test]
    fn skybox_view_has_no_translation() {
        let mut cam = Camera::at(Vec3::new(10.0, -4.0, 7.0));
        cam.apply_look(25.0, 10.0);
        let sky = cam.skybox_view_matrix();
        assert_eq!(sky.w_axis, glam::Vec4::W);
        // rotation part matches the full view matrix
        let view = cam.view_matrix();
        assert!(Mat3::from_mat4(sky).abs_diff_eq(Mat3::from_mat4(view), EPS));
    }

    #[test]
    fn view_projection_composes() {
        let cam = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let proj = Projection::default();
        let vp = cam.view_projection(&proj, 16.0 / 9.0);
        let expected = proj.matrix(cam.zoom(), 16.0 / 9.0) * cam.view_matrix();
        assert_eq!(vp, expected);
    }
}

use eyeline_camera::{Camera, Projection};
use glam::{Mat4, Vec3};

/// Camera state frozen for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Eye position in world space, for lighting.
    pub eye: Vec3,
    /// Look direction, for the flashlight cone.
    pub front: Vec3,
    pub up: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
    /// View matrix without translation, for the sky pass.
    pub sky_view: Mat4,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
}

impl RenderView {
    pub fn capture(camera: &Camera, projection: &Projection, aspect: f32) -> Self {
        Self {
            eye: camera.position(),
            front: camera.front(),
            up: camera.up(),
            view: camera.view_matrix(),
            projection: camera.projection_matrix(projection, aspect),
            sky_view: camera.skybox_view_matrix(),
            fov_degrees: camera.zoom(),
            aspect,
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    pub fn sky_view_projection(&self) -> Mat4 {
        self.projection * self.sky_view
    }

    /// Point one unit ahead of the eye.
    pub fn target(&self) -> Vec3 {
        self.eye + self.front
    }
}

impl Default for RenderView {
    fn default() -> Self {
        Self::capture(&Camera::default(), &Projection::default(), 1.0)
    }
}

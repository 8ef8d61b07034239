use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// A unit cube placed in the world with a flat base color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub transform: Transform,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(1.2, 1.0, 2.0),
            color: Vec3::ONE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub light: PointLight,
    pub clear_color: [f64; 4],
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            light: PointLight::default(),
            clear_color: [0.1, 0.1, 0.1, 1.0],
        }
    }
}

/// Cube placements of the classic "ten cubes" camera demo.
const DEMO_POSITIONS: [[f32; 3]; 10] = [
    [0.0, 0.0, 0.0],
    [2.0, 5.0, -15.0],
    [-1.5, -2.2, -2.5],
    [-3.8, -2.0, -12.3],
    [2.4, -0.4, -3.5],
    [-1.7, 3.0, -7.5],
    [1.3, -2.0, -2.5],
    [1.5, 2.0, -2.5],
    [1.5, 0.2, -1.5],
    [-1.3, 1.0, -1.5],
];

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ten cubes in front of a camera at (0, 0, 3), each tilted by
    /// 20° more than the last around a common axis.
    pub fn demo() -> Self {
        let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
        let objects = DEMO_POSITIONS
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let angle = (20.0 * i as f32).to_radians();
                let hue = i as f32 / DEMO_POSITIONS.len() as f32;
                SceneObject {
                    transform: Transform {
                        position: Vec3::from_array(*p),
                        rotation: Quat::from_axis_angle(axis, angle),
                        scale: Vec3::ONE,
                    },
                    color: [1.0, 0.5 + 0.3 * hue, 0.31, 1.0],
                }
            })
            .collect();
        Self {
            objects,
            ..Self::default()
        }
    }

    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

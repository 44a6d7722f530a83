use crate::config::GridConfig;
use glam::{Mat4, Vec3};

/// Per-frame pose of the horizon grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTransform {
    /// Spin about the plane's own normal, radians.
    pub spin: f32,
    pub y: f32,
    pub z: f32,
    pub tilt_x: f32,
}

impl GridTransform {
    pub fn at(t: f32, scroll_y: f32, config: &GridConfig) -> Self {
        Self {
            spin: t * config.spin_per_sec + scroll_y * config.spin_per_scroll_px,
            z: config.base_z + (t * config.depth_sway_rate).sin() * config.depth_sway_amp
                - scroll_y * config.depth_per_scroll_px,
            y: config.base_y + (t * config.height_sway_rate).sin() * config.height_sway_amp,
            tilt_x: config.tilt_x,
        }
    }

    /// Translation, then tilt about X, then spin about the local normal.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.y, self.z))
            * Mat4::from_rotation_x(self.tilt_x)
            * Mat4::from_rotation_z(self.spin)
    }
}

//! Perspective camera with pointer parallax and scroll dolly.

use crate::config::CameraConfig;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera looking down -Z with +Y up.
///
/// There is no look-at target: parallax comes from translating the eye while
/// the view direction stays fixed.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            position: config.start,
            aspect,
            fovy_radians: config.fov_y_deg.to_radians(),
            znear: config.near,
            zfar: config.far,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Compute the clip-space projection matrix (wgpu depth range 0..1).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Move x/y a fraction of the way to `target`, keeping z.
    pub fn smooth_toward(&mut self, target: Vec2, factor: f32) {
        self.position.x = smooth_step(self.position.x, target.x, factor);
        self.position.y = smooth_step(self.position.y, target.y, factor);
    }
}

/// One exponential smoothing step. With `factor` in (0, 1] the result lies
/// between `current` and `target` inclusive.
#[inline]
pub fn smooth_step(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Where the eye wants to be for a normalized pointer offset.
#[inline]
pub fn parallax_target(pointer: Vec2, config: &CameraConfig) -> Vec2 {
    Vec2::new(pointer.x * config.parallax_x, -pointer.y * config.parallax_y)
}

/// Eye distance for a scroll offset; the camera pulls back as the page scrolls.
#[inline]
pub fn scroll_depth(scroll_y: f32, config: &CameraConfig) -> f32 {
    config.base_z + scroll_y * config.z_per_scroll_px
}

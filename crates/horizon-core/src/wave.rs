use crate::config::WaveConfig;
use crate::constants::{WAVE_AMPLITUDE, WAVE_FREQ_DIVISOR, WAVE_SPEED};
use crate::geometry::PlaneGeometry;
use glam::Mat4;

/// Height of the default wave surface at planar `(x, y)` after `t` seconds.
#[inline]
pub fn wave_height(x: f32, y: f32, t: f32) -> f32 {
    wave_height_with(x, y, t, WAVE_FREQ_DIVISOR, WAVE_SPEED, WAVE_AMPLITUDE)
}

#[inline]
pub fn wave_height_with(x: f32, y: f32, t: f32, divisor: f32, speed: f32, amplitude: f32) -> f32 {
    let phase = t * speed;
    (x / divisor + phase).sin() * (y / divisor + phase).cos() * amplitude
}

/// The foreground wireframe plane. Only vertex heights change per frame.
pub struct WaveMesh {
    geometry: PlaneGeometry,
    config: WaveConfig,
}

impl WaveMesh {
    pub fn new(config: &WaveConfig) -> Self {
        Self {
            geometry: PlaneGeometry::new(config.size, config.size, config.segments, config.segments),
            config: config.clone(),
        }
    }

    /// Recompute every vertex height for elapsed time `t`.
    pub fn update(&mut self, t: f32) {
        let WaveConfig {
            freq_divisor,
            speed,
            amplitude,
            ..
        } = self.config;
        for p in self.geometry.positions_mut() {
            p.z = wave_height_with(p.x, p.y, t, freq_divisor, speed, amplitude);
        }
    }

    #[inline]
    pub fn geometry(&self) -> &PlaneGeometry {
        &self.geometry
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(glam::Vec3::new(0.0, self.config.offset_y, 0.0))
            * Mat4::from_rotation_x(self.config.tilt_x)
    }
}

//! Tunables for the background, with defaults taken from [`crate::constants`].
//!
//! The web frontend starts from [`BackgroundConfig::default`] and may apply a
//! few overrides read from the page before calling [`BackgroundConfig::validate`].

use crate::constants::*;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} plane size must be positive, got {value}")]
    PlaneSize { name: &'static str, value: f32 },
    #[error("{name} plane needs at least one segment per axis")]
    Segments { name: &'static str },
    #[error("wave frequency divisor must be finite and non-zero")]
    WaveFrequency,
    #[error("camera smoothing must be in (0, 1], got {0}")]
    Smoothing(f32),
    #[error("camera field of view must be in (0, 180) degrees, got {0}")]
    FieldOfView(f32),
    #[error("camera clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },
    #[error("opacity must be in [0, 1], got {0}")]
    Opacity(f32),
    #[error("navbar fade distance must be positive, got {0}")]
    FadeDistance(f32),
    #[error("{name} must be finite")]
    NotFinite { name: &'static str },
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    pub size: f32,
    pub segments: u32,
    pub tilt_x: f32,
    pub offset_y: f32,
    pub freq_divisor: f32,
    pub speed: f32,
    pub amplitude: f32,
    pub color: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            size: WAVE_SIZE,
            segments: WAVE_SEGMENTS,
            tilt_x: WAVE_TILT_X,
            offset_y: WAVE_OFFSET_Y,
            freq_divisor: WAVE_FREQ_DIVISOR,
            speed: WAVE_SPEED,
            amplitude: WAVE_AMPLITUDE,
            color: WAVE_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub size: f32,
    pub segments: u32,
    pub tilt_x: f32,
    pub base_y: f32,
    pub base_z: f32,
    pub spin_per_sec: f32,
    pub spin_per_scroll_px: f32,
    pub depth_sway_rate: f32,
    pub depth_sway_amp: f32,
    pub depth_per_scroll_px: f32,
    pub height_sway_rate: f32,
    pub height_sway_amp: f32,
    pub color: u32,
    pub opacity: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            segments: GRID_SEGMENTS,
            tilt_x: GRID_TILT_X,
            base_y: GRID_BASE_Y,
            base_z: GRID_BASE_Z,
            spin_per_sec: GRID_SPIN_PER_SEC,
            spin_per_scroll_px: GRID_SPIN_PER_SCROLL_PX,
            depth_sway_rate: GRID_DEPTH_SWAY_RATE,
            depth_sway_amp: GRID_DEPTH_SWAY_AMP,
            depth_per_scroll_px: GRID_DEPTH_PER_SCROLL_PX,
            height_sway_rate: GRID_HEIGHT_SWAY_RATE,
            height_sway_amp: GRID_HEIGHT_SWAY_AMP,
            color: GRID_COLOR,
            opacity: GRID_OPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub start: Vec3,
    pub parallax_x: f32,
    pub parallax_y: f32,
    pub smoothing: f32,
    pub base_z: f32,
    pub z_per_scroll_px: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: CAMERA_FOV_Y_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            start: CAMERA_START,
            parallax_x: CAMERA_PARALLAX_X,
            parallax_y: CAMERA_PARALLAX_Y,
            smoothing: CAMERA_SMOOTHING,
            base_z: CAMERA_BASE_Z,
            z_per_scroll_px: CAMERA_Z_PER_SCROLL_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub fade_distance_px: f32,
    pub fade_depth: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            fade_distance_px: NAV_FADE_DISTANCE_PX,
            fade_depth: NAV_FADE_DEPTH,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackgroundConfig {
    pub wave: WaveConfig,
    pub grid: GridConfig,
    pub camera: CameraConfig,
    pub nav: NavConfig,
}

impl BackgroundConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, size, segments) in [
            ("wave", self.wave.size, self.wave.segments),
            ("grid", self.grid.size, self.grid.segments),
        ] {
            if !(size > 0.0 && size.is_finite()) {
                return Err(ConfigError::PlaneSize { name, value: size });
            }
            if segments == 0 {
                return Err(ConfigError::Segments { name });
            }
        }
        let d = self.wave.freq_divisor;
        if !(d.is_finite() && d != 0.0) {
            return Err(ConfigError::WaveFrequency);
        }
        for (name, v) in [
            ("wave speed", self.wave.speed),
            ("wave amplitude", self.wave.amplitude),
            ("camera parallax x", self.camera.parallax_x),
            ("camera parallax y", self.camera.parallax_y),
            ("camera scroll depth gain", self.camera.z_per_scroll_px),
            ("grid base y", self.grid.base_y),
            ("grid base z", self.grid.base_z),
            ("grid spin rate", self.grid.spin_per_sec),
            ("grid spin per scroll", self.grid.spin_per_scroll_px),
            ("grid depth sway rate", self.grid.depth_sway_rate),
            ("grid depth sway", self.grid.depth_sway_amp),
            ("grid depth per scroll", self.grid.depth_per_scroll_px),
            ("grid height sway rate", self.grid.height_sway_rate),
            ("grid height sway", self.grid.height_sway_amp),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::NotFinite { name });
            }
        }
        let s = self.camera.smoothing;
        if !(s > 0.0 && s <= 1.0) {
            return Err(ConfigError::Smoothing(s));
        }
        let fov = self.camera.fov_y_deg;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(ConfigError::FieldOfView(fov));
        }
        let (near, far) = (self.camera.near, self.camera.far);
        if !(near > 0.0 && near < far) {
            return Err(ConfigError::ClipPlanes { near, far });
        }
        let op = self.grid.opacity;
        if !(0.0..=1.0).contains(&op) {
            return Err(ConfigError::Opacity(op));
        }
        let fade = self.nav.fade_depth;
        if !(0.0..=1.0).contains(&fade) {
            return Err(ConfigError::Opacity(fade));
        }
        let dist = self.nav.fade_distance_px;
        if !(dist > 0.0 && dist.is_finite()) {
            return Err(ConfigError::FadeDistance(dist));
        }
        Ok(())
    }
}

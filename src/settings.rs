// Page-level overrides for `BackgroundConfig`, read from `data-*` attributes
// on the container element.

use horizon_core::{BackgroundConfig, CAMERA_PARALLAX_X, CAMERA_PARALLAX_Y};

pub const ATTR_WAVE_SPEED: &str = "data-wave-speed";
pub const ATTR_WAVE_AMPLITUDE: &str = "data-wave-amplitude";
pub const ATTR_PARALLAX: &str = "data-parallax"; // multiplier on both parallax gains
pub const ATTR_SMOOTHING: &str = "data-smoothing";

pub const OVERRIDE_ATTRS: [&str; 4] = [
    ATTR_WAVE_SPEED,
    ATTR_WAVE_AMPLITUDE,
    ATTR_PARALLAX,
    ATTR_SMOOTHING,
];

/// Apply `(attribute, raw value)` pairs on top of `base`.
///
/// Unparsable values and unknown attributes are skipped with a warning. If the
/// result does not validate, `base` is returned unchanged.
pub fn apply_overrides<'a, I>(base: &BackgroundConfig, overrides: I) -> BackgroundConfig
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut cfg = base.clone();
    for (attr, raw) in overrides {
        let value = match raw.trim().parse::<f32>() {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[settings] ignoring {}={:?}: {}", attr, raw, e);
                continue;
            }
        };
        match attr {
            ATTR_WAVE_SPEED => cfg.wave.speed = value,
            ATTR_WAVE_AMPLITUDE => cfg.wave.amplitude = value,
            ATTR_PARALLAX => {
                cfg.camera.parallax_x = CAMERA_PARALLAX_X * value;
                cfg.camera.parallax_y = CAMERA_PARALLAX_Y * value;
            }
            ATTR_SMOOTHING => cfg.camera.smoothing = value,
            other => log::warn!("[settings] unknown attribute {}", other),
        }
    }
    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            log::warn!("[settings] overrides rejected, using defaults: {}", e);
            base.clone()
        }
    }
}

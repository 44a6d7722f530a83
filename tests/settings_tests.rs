// Host-side tests for page-level config overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod settings {
    include!("../src/settings.rs");
}

use horizon_core::BackgroundConfig;
use settings::*;

#[test]
fn no_overrides_keeps_base() {
    let base = BackgroundConfig::default();
    let cfg = apply_overrides(&base, std::iter::empty());
    assert_eq!(cfg, base);
}

#[test]
fn numeric_overrides_apply() {
    let base = BackgroundConfig::default();
    let cfg = apply_overrides(
        &base,
        [
            (ATTR_WAVE_SPEED, "0.7"),
            (ATTR_WAVE_AMPLITUDE, " 3 "),
            (ATTR_SMOOTHING, "0.1"),
        ],
    );
    assert_eq!(cfg.wave.speed, 0.7);
    assert_eq!(cfg.wave.amplitude, 3.0);
    assert_eq!(cfg.camera.smoothing, 0.1);
    // Untouched fields keep their defaults.
    assert_eq!(cfg.grid, base.grid);
}

#[test]
fn parallax_scales_both_axes() {
    let cfg = apply_overrides(&BackgroundConfig::default(), [(ATTR_PARALLAX, "0.5")]);
    assert_eq!(cfg.camera.parallax_x, 5.0);
    assert_eq!(cfg.camera.parallax_y, 3.0);
}

#[test]
fn unparsable_values_are_skipped() {
    let cfg = apply_overrides(
        &BackgroundConfig::default(),
        [(ATTR_WAVE_SPEED, "fast"), (ATTR_WAVE_AMPLITUDE, "1.5")],
    );
    assert_eq!(cfg.wave.speed, horizon_core::WAVE_SPEED);
    assert_eq!(cfg.wave.amplitude, 1.5);
}

#[test]
fn unknown_attributes_are_ignored() {
    let base = BackgroundConfig::default();
    let cfg = apply_overrides(&base, [("data-color", "3")]);
    assert_eq!(cfg, base);
}

#[test]
fn invalid_result_falls_back_to_base() {
    let base = BackgroundConfig::default();
    // Smoothing of 2 would overshoot the target every frame.
    let cfg = apply_overrides(&base, [(ATTR_WAVE_SPEED, "2.0"), (ATTR_SMOOTHING, "2")]);
    assert_eq!(cfg, base);
}

#[test]
fn override_attrs_are_data_attributes() {
    for a in OVERRIDE_ATTRS {
        assert!(a.starts_with("data-"));
    }
}

use horizon_core::*;

#[test]
fn defaults_validate() {
    assert_eq!(BackgroundConfig::default().validate(), Ok(()));
}

#[test]
fn rejects_bad_plane() {
    let mut cfg = BackgroundConfig::default();
    cfg.wave.size = 0.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::PlaneSize { name: "wave", .. })));

    let mut cfg = BackgroundConfig::default();
    cfg.grid.segments = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::Segments { name: "grid" }));
}

#[test]
fn rejects_bad_smoothing() {
    for s in [0.0, -0.1, 1.5, f32::NAN] {
        let mut cfg = BackgroundConfig::default();
        cfg.camera.smoothing = s;
        assert!(matches!(cfg.validate(), Err(ConfigError::Smoothing(_))), "{s}");
    }
    let mut cfg = BackgroundConfig::default();
    cfg.camera.smoothing = 1.0;
    assert!(cfg.validate().is_ok());
}

#[test]
fn rejects_bad_camera() {
    let mut cfg = BackgroundConfig::default();
    cfg.camera.fov_y_deg = 180.0;
    assert_eq!(cfg.validate(), Err(ConfigError::FieldOfView(180.0)));

    let mut cfg = BackgroundConfig::default();
    cfg.camera.near = 10.0;
    cfg.camera.far = 5.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::ClipPlanes { near: 10.0, far: 5.0 })
    );
}

#[test]
fn rejects_bad_opacity_and_fade() {
    let mut cfg = BackgroundConfig::default();
    cfg.grid.opacity = 1.2;
    assert_eq!(cfg.validate(), Err(ConfigError::Opacity(1.2)));

    let mut cfg = BackgroundConfig::default();
    cfg.nav.fade_distance_px = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::FadeDistance(0.0)));
}

#[test]
fn rejects_non_finite_tunables() {
    let mut cfg = BackgroundConfig::default();
    cfg.wave.speed = f32::INFINITY;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NotFinite { name: "wave speed" })
    );
    let mut cfg = BackgroundConfig::default();
    cfg.wave.freq_divisor = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::WaveFrequency));
}

#[test]
fn error_messages_name_the_field() {
    let e = ConfigError::PlaneSize {
        name: "grid",
        value: -1.0,
    };
    assert_eq!(e.to_string(), "grid plane size must be positive, got -1");
}

#[test]
fn rejects_non_finite_frequency_divisor() {
    for d in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let mut cfg = BackgroundConfig::default();
        cfg.wave.freq_divisor = d;
        assert_eq!(cfg.validate(), Err(ConfigError::WaveFrequency), "{d}");
    }
}

#[test]
fn rejects_non_finite_grid_motion() {
    let mut cfg = BackgroundConfig::default();
    cfg.grid.base_z = f32::INFINITY;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NotFinite { name: "grid base z" })
    );

    let mut cfg = BackgroundConfig::default();
    cfg.grid.depth_per_scroll_px = f32::NAN;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NotFinite {
            name: "grid depth per scroll"
        })
    );

    let mut cfg = BackgroundConfig::default();
    cfg.camera.z_per_scroll_px = f32::NEG_INFINITY;
    assert!(matches!(cfg.validate(), Err(ConfigError::NotFinite { .. })));
}

#[test]
fn rejects_nan_and_infinite_sizes() {
    let mut cfg = BackgroundConfig::default();
    cfg.grid.size = f32::NAN;
    assert!(matches!(cfg.validate(), Err(ConfigError::PlaneSize { name: "grid", .. })));

    let mut cfg = BackgroundConfig::default();
    cfg.wave.size = f32::INFINITY;
    assert!(matches!(cfg.validate(), Err(ConfigError::PlaneSize { name: "wave", .. })));

    for dist in [f32::NAN, f32::INFINITY] {
        let mut cfg = BackgroundConfig::default();
        cfg.nav.fade_distance_px = dist;
        assert!(matches!(cfg.validate(), Err(ConfigError::FadeDistance(_))));
    }
}

use glam::{Vec2, Vec3};
use horizon_core::*;

fn scene() -> SceneState {
    SceneState::new(BackgroundConfig::default(), Viewport::new(1280.0, 720.0, 2.0))
}

#[test]
fn navbar_opacity_fade_points() {
    assert_eq!(navbar_opacity(0.0), 1.0);
    assert!((navbar_opacity(300.0) - 0.7).abs() < 1e-6);
    assert!((navbar_opacity(150.0) - 0.85).abs() < 1e-6);
    assert!((navbar_opacity(5000.0) - 0.7).abs() < 1e-6);
    // Overscroll bounce reports negative offsets.
    assert_eq!(navbar_opacity(-40.0), 1.0);
}

#[test]
fn set_scroll_reports_opacity() {
    let mut s = scene();
    assert!((s.set_scroll(300.0) - 0.7).abs() < 1e-6);
    assert_eq!(s.input.scroll_y, 300.0);
}

#[test]
fn pointer_normalization() {
    assert_eq!(normalize_pointer(640.0, 360.0, 1280.0, 720.0), Vec2::ZERO);
    assert_eq!(normalize_pointer(0.0, 0.0, 1280.0, 720.0), Vec2::new(-1.0, -1.0));
    assert_eq!(normalize_pointer(1280.0, 720.0, 1280.0, 720.0), Vec2::new(1.0, 1.0));
    assert_eq!(normalize_pointer(960.0, 180.0, 1280.0, 720.0), Vec2::new(0.5, -0.5));
    // Outside the viewport is clamped; a collapsed viewport yields center.
    assert_eq!(normalize_pointer(-500.0, 2000.0, 1280.0, 720.0), Vec2::new(-1.0, 1.0));
    assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 0.0), Vec2::ZERO);
}

#[test]
fn resize_updates_aspect_and_backing_size() {
    let mut s = scene();
    let vp = Viewport::new(1024.0, 512.0, 1.5);
    s.resize(vp);
    assert_eq!(s.camera.aspect, 2.0);
    assert_eq!(s.viewport.backing_size(), (1536, 768));
}

#[test]
fn viewport_guards() {
    let vp = Viewport::new(0.0, 0.0, 0.0);
    assert_eq!(vp.aspect(), 1.0);
    assert_eq!(vp.pixel_ratio, 1.0);
    assert_eq!(vp.backing_size(), (1, 1));
}

#[test]
fn advance_tracks_pointer_and_scroll() {
    let mut s = scene();
    s.set_pointer(Vec2::new(1.0, 1.0));
    s.set_scroll(100.0);
    let mut prev = s.camera.position;
    for i in 1..=300 {
        s.advance(i as f32 / 60.0);
        let p = s.camera.position;
        assert!(p.x >= prev.x && p.x <= 10.0);
        assert!(p.y <= prev.y && p.y >= -6.0);
        assert!((p.z - 86.0).abs() < 1e-4);
        prev = p;
    }
    assert!((prev.x - 10.0).abs() < 1e-3);
    assert!((prev.y + 6.0).abs() < 1e-3);
}

#[test]
fn first_frame_moves_from_start_position() {
    let mut s = scene();
    s.advance(0.0);
    // Pointer at rest: x stays 0, y eases from 10 toward 0, z is direct.
    assert_eq!(s.camera.position, Vec3::new(0.0, 9.5, 80.0));
}

#[test]
fn grid_pose_formulas() {
    let cfg = GridConfig::default();
    let (t, scroll) = (12.0_f32, 400.0_f32);
    let g = GridTransform::at(t, scroll, &cfg);
    assert!((g.spin - (t * 0.01 + scroll * 0.0002)).abs() < 1e-6);
    assert!((g.z - (-100.0 + (t * 0.3).sin() * 10.0 - scroll * 0.15)).abs() < 1e-4);
    assert!((g.y - (-100.0 + (t * 0.2).sin() * 5.0)).abs() < 1e-4);
}

#[test]
fn grid_pose_is_continuous_in_time() {
    let cfg = GridConfig::default();
    let dt = 1.0 / 240.0;
    let mut prev = GridTransform::at(0.0, 250.0, &cfg);
    for i in 1..2400 {
        let g = GridTransform::at(i as f32 * dt, 250.0, &cfg);
        // Bounded by the largest derivative times the step.
        assert!((g.spin - prev.spin).abs() <= 0.01 * dt + 1e-5);
        assert!((g.z - prev.z).abs() <= 3.0 * dt + 1e-4);
        assert!((g.y - prev.y).abs() <= 1.0 * dt + 1e-4);
        prev = g;
    }
}

#[test]
fn frame_uniforms_carry_colors() {
    let mut s = scene();
    let u = s.advance(1.0);
    assert_eq!(u.wave.color[3], 1.0);
    assert!((u.grid.color[3] - 0.3).abs() < 1e-6);
    assert_eq!(std::mem::size_of::<LineUniforms>(), 80);
}

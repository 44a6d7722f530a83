use crate::config::NavConfig;
use glam::Vec2;

/// Map a cursor position in CSS pixels to `[-1, 1]` per axis around the
/// viewport center. Positive y points down, as in client coordinates.
#[inline]
pub fn normalize_pointer(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if !(width > 0.0 && height > 0.0) {
        return Vec2::ZERO;
    }
    let x = (client_x / width - 0.5) * 2.0;
    let y = (client_y / height - 0.5) * 2.0;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Navbar opacity for a scroll offset: fades linearly over the fade distance
/// and then holds at `1 - fade_depth`.
#[inline]
pub fn navbar_opacity_with(scroll_y: f32, nav: &NavConfig) -> f32 {
    let fade = (scroll_y.max(0.0) / nav.fade_distance_px).min(1.0);
    1.0 - fade * nav.fade_depth
}

#[inline]
pub fn navbar_opacity(scroll_y: f32) -> f32 {
    navbar_opacity_with(scroll_y, &NavConfig::default())
}

/// Last observed pointer and scroll, overwritten by event handlers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerScroll {
    pub pointer: Vec2,
    pub scroll_y: f32,
}

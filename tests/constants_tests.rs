// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use horizon_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn msaa_is_a_valid_sample_count() {
    assert!(matches!(MSAA_SAMPLES, 1 | 2 | 4 | 8));
}

#[test]
fn element_ids_are_bare() {
    assert!(!CONTAINER_ID.starts_with('#'));
    assert!(!NAVBAR_ID.starts_with('#'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_consistent() {
    // The grid sits behind and below the wave plane.
    assert!(GRID_BASE_Z < 0.0 && GRID_BASE_Y < WAVE_OFFSET_Y);
    assert!(GRID_SIZE > WAVE_SIZE);
    // The camera starts inside its clip range looking at the wave plane.
    assert!(CAMERA_START.z > CAMERA_NEAR && CAMERA_START.z < CAMERA_FAR);
    assert!(CAMERA_SMOOTHING > 0.0 && CAMERA_SMOOTHING <= 1.0);
    assert!(GRID_OPACITY > 0.0 && GRID_OPACITY < 1.0);
    assert!(NAV_FADE_DEPTH < 1.0);
}

#[test]
fn depth_format_has_no_stencil() {
    assert!(!DEPTH_FORMAT.has_stencil_aspect());
    assert!(DEPTH_FORMAT.has_depth_aspect());
}

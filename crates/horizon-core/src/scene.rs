//! The explicit per-page context: everything the frame loop and the event
//! handlers read or write.

use crate::camera::{parallax_target, scroll_depth, PerspectiveCamera};
use crate::color::Rgb;
use crate::config::BackgroundConfig;
use crate::grid::GridTransform;
use crate::input::{navbar_opacity_with, PointerScroll};
use crate::viewport::Viewport;
use crate::wave::WaveMesh;
use glam::{Mat4, Vec2};

/// Uniform block for one wireframe draw, shared with `lines.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineUniforms {
    pub mvp: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl LineUniforms {
    pub fn new(mvp: Mat4, color: [f32; 4]) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            color,
        }
    }
}

/// Everything the renderer needs for one frame besides the wave vertices.
#[derive(Copy, Clone, Debug)]
pub struct FrameUniforms {
    pub wave: LineUniforms,
    pub grid: LineUniforms,
}

pub struct SceneState {
    config: BackgroundConfig,
    pub camera: PerspectiveCamera,
    pub wave: WaveMesh,
    pub grid: GridTransform,
    pub input: PointerScroll,
    pub viewport: Viewport,
    wave_color: [f32; 4],
    grid_color: [f32; 4],
}

impl SceneState {
    pub fn new(config: BackgroundConfig, viewport: Viewport) -> Self {
        let camera = PerspectiveCamera::new(&config.camera, viewport.aspect());
        let wave = WaveMesh::new(&config.wave);
        let grid = GridTransform::at(0.0, 0.0, &config.grid);
        let wave_color = Rgb::from_hex(config.wave.color).to_linear_rgba(1.0);
        let grid_color = Rgb::from_hex(config.grid.color).to_linear_rgba(config.grid.opacity);
        Self {
            config,
            camera,
            wave,
            grid,
            input: PointerScroll::default(),
            viewport,
            wave_color,
            grid_color,
        }
    }

    #[inline]
    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.input.pointer = pointer.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    /// Record the scroll offset and return the navbar opacity for it.
    pub fn set_scroll(&mut self, scroll_y: f32) -> f32 {
        self.input.scroll_y = scroll_y.max(0.0);
        navbar_opacity_with(self.input.scroll_y, &self.config.nav)
    }

    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!(
            "[scene] resize {}x{} @{}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
    }

    /// Step the animation to elapsed time `t` (seconds since start).
    pub fn advance(&mut self, t: f32) -> FrameUniforms {
        let scroll = self.input.scroll_y;

        self.wave.update(t);

        let target = parallax_target(self.input.pointer, &self.config.camera);
        self.camera.smooth_toward(target, self.config.camera.smoothing);
        self.camera.position.z = scroll_depth(scroll, &self.config.camera);

        self.grid = GridTransform::at(t, scroll, &self.config.grid);

        let view_proj = self.camera.view_projection();
        FrameUniforms {
            wave: LineUniforms::new(view_proj * self.wave.model_matrix(), self.wave_color),
            grid: LineUniforms::new(view_proj * self.grid.model_matrix(), self.grid_color),
        }
    }

    pub fn clear_color(&self) -> [f32; 3] {
        Rgb::from_hex(crate::constants::CLEAR_COLOR).to_linear()
    }
}

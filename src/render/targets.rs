use super::helpers;
use crate::constants::DEPTH_FORMAT;
use wgpu;

/// Offscreen attachments sized to the surface.
///
/// - `msaa_*` is the multisampled color target resolved into the swapchain
///   image; absent when rendering single-sampled.
/// - `depth_*` matches the color sample count.
///
/// Textures are held so the webgpu backend does not destroy them under the views.
pub(crate) struct RenderTargets {
    _msaa_tex: Option<wgpu::Texture>,
    pub(crate) msaa_view: Option<wgpu::TextureView>,
    _depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (depth_tex, depth_view) =
            helpers::create_render_texture(device, "depth_tex", width, height, DEPTH_FORMAT, sample_count);
        let (msaa_tex, msaa_view) = if sample_count > 1 {
            let (t, v) = helpers::create_render_texture(
                device,
                "msaa_color",
                width,
                height,
                color_format,
                sample_count,
            );
            (Some(t), Some(v))
        } else {
            (None, None)
        };
        Self {
            _msaa_tex: msaa_tex,
            msaa_view,
            _depth_tex: depth_tex,
            depth_view,
            color_format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.color_format, self.sample_count);
    }

    #[inline]
    pub(crate) fn sample_count(&self) -> u32 {
        self.sample_count
    }
}

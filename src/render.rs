use crate::constants::MSAA_SAMPLES;
use horizon_core::{FrameUniforms, SceneState};
use web_sys as web;

mod helpers;
mod lines;
mod targets;
use lines::LineMesh;
use targets::RenderTargets;

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    wave: LineMesh,
    grid: LineMesh,
    wave_scratch: Vec<[f32; 3]>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &SceneState) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sample_count = helpers::supported_sample_count(&adapter, format, MSAA_SAMPLES);
        log::info!(
            "[gpu] adapter={:?} format={:?} msaa={}",
            adapter.get_info().backend,
            format,
            sample_count
        );
        let targets = RenderTargets::new(&device, width, height, format, sample_count);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lines_shader"),
            source: wgpu::ShaderSource::Wgsl(horizon_core::LINES_WGSL.into()),
        });
        let bgl = lines::create_uniform_layout(&device);
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lines_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let opaque_pipeline =
            lines::make_line_pipeline(&device, &pl, &shader, format, targets.sample_count(), false);
        let translucent_pipeline =
            lines::make_line_pipeline(&device, &pl, &shader, format, targets.sample_count(), true);

        let wave = LineMesh::new(&device, "wave", scene.wave.geometry(), &bgl, true);
        let grid_cfg = &scene.config().grid;
        let grid_geometry = horizon_core::PlaneGeometry::new(
            grid_cfg.size,
            grid_cfg.size,
            grid_cfg.segments,
            grid_cfg.segments,
        );
        let grid = LineMesh::new(&device, "grid", &grid_geometry, &bgl, false);

        let [r, g, b] = scene.clear_color();
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            opaque_pipeline,
            translucent_pipeline,
            wave,
            grid,
            wave_scratch: Vec::with_capacity(scene.wave.geometry().vertex_count()),
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            log::debug!("[gpu] resize {}x{} -> {}x{}", self.width, self.height, width, height);
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
    }

    /// Upload the frame's wave heights and matrices, then draw wave and grid.
    pub fn render(&mut self, scene: &SceneState, uniforms: &FrameUniforms) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.reconfigure();
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.wave_scratch.clear();
        self.wave_scratch
            .extend(scene.wave.geometry().positions().iter().map(|p| p.to_array()));
        self.queue.write_buffer(
            &self.wave.vertex_buffer,
            0,
            bytemuck::cast_slice(&self.wave_scratch),
        );
        self.queue
            .write_buffer(&self.wave.uniform_buffer, 0, bytemuck::bytes_of(&uniforms.wave));
        self.queue
            .write_buffer(&self.grid.uniform_buffer, 0, bytemuck::bytes_of(&uniforms.grid));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let (color_view, resolve_target) = match &self.targets.msaa_view {
                Some(msaa) => (msaa, Some(&view)),
                None => (&view, None),
            };
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // Opaque wave first so the translucent grid depth-tests against it.
            self.wave.draw(&mut rpass, &self.opaque_pipeline);
            self.grid.draw(&mut rpass, &self.translucent_pipeline);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

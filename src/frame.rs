use crate::render;
use horizon_core::SceneState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub start: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let t = self.start.elapsed().as_secs_f32();

        let mut scene = self.scene.borrow_mut();
        let uniforms = scene.advance(t);

        self.gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render(&scene, &uniforms) {
            Ok(()) => {}
            // Reconfigured inside render; the next frame draws normally.
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface reconfigured");
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// Bring up WebGPU before the scene is shared with event handlers, so no
/// `RefCell` borrow is held across the adapter/device awaits.
pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &SceneState,
) -> anyhow::Result<render::GpuState> {
    render::GpuState::new(canvas, scene).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &RefCell<Option<Closure<dyn FnMut()>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

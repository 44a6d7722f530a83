use crate::dom;
use horizon_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep camera aspect and canvas size in step with the viewport. The GPU
/// surface follows the canvas backing size on the next frame.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    scene: Rc<RefCell<SceneState>>,
) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let vp = dom::viewport_of(&win);
        dom::sync_canvas_size(&canvas, &vp);
        scene.borrow_mut().resize(vp);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

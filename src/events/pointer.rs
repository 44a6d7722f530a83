use horizon_core::{normalize_pointer, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the cursor anywhere on the page as a normalized offset from the
/// viewport center.
pub fn wire_pointer_move(document: &web::Document, scene: Rc<RefCell<SceneState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let vp = scene.borrow().viewport;
        let p = normalize_pointer(ev.client_x() as f32, ev.client_y() as f32, vp.width, vp.height);
        scene.borrow_mut().set_pointer(p);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

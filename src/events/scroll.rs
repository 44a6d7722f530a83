use crate::dom;
use horizon_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Store the current scroll offset and fade the navbar to match.
pub fn apply_scroll(window: &web::Window, scene: &RefCell<SceneState>, navbar: Option<&web::HtmlElement>) {
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let opacity = scene.borrow_mut().set_scroll(scroll_y);
    if let Some(nav) = navbar {
        dom::set_opacity(nav, opacity);
    }
}

pub fn wire_scroll(
    window: &web::Window,
    scene: Rc<RefCell<SceneState>>,
    navbar: Option<web::HtmlElement>,
) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        apply_scroll(&win, &scene, navbar.as_ref());
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

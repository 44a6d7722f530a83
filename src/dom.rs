use crate::constants::{CANVAS_CLASS, CANVAS_STYLE};
use horizon_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current viewport from `innerWidth`/`innerHeight` and `devicePixelRatio`.
pub fn viewport_of(window: &web::Window) -> Viewport {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|j| j.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(
        px(window.inner_width()),
        px(window.inner_height()),
        window.device_pixel_ratio() as f32,
    )
}

/// Create the render canvas and append it to `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_class_name(CANVAS_CLASS);
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// Size the canvas to the viewport: CSS pixels for layout, device pixels for
/// the backing store.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    let (w, h) = viewport.backing_size();
    canvas.set_width(w);
    canvas.set_height(h);
}

pub fn set_opacity(el: &web::HtmlElement, opacity: f32) {
    _ = el.style().set_property("opacity", &opacity.to_string());
}

/// Raw values of the given attributes present on `el`.
pub fn read_attributes(el: &web::Element, names: &[&'static str]) -> Vec<(&'static str, String)> {
    names
        .iter()
        .filter_map(|name| el.get_attribute(name).map(|v| (*name, v)))
        .collect()
}

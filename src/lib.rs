#![cfg(target_arch = "wasm32")]
use crate::constants::{CONTAINER_ID, NAVBAR_ID};
use horizon_core::{BackgroundConfig, SceneState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod settings;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("horizon-bg starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn load_config(container: &web::Element) -> BackgroundConfig {
    let raw = dom::read_attributes(container, &settings::OVERRIDE_ATTRS);
    let cfg = settings::apply_overrides(
        &BackgroundConfig::default(),
        raw.iter().map(|(k, v)| (*k, v.as_str())),
    );
    if !raw.is_empty() {
        log::info!("[settings] applied {} override(s)", raw.len());
    }
    cfg
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;
    let navbar = document
        .get_element_by_id(NAVBAR_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if navbar.is_none() {
        log::warn!("#{} not found; navbar fade disabled", NAVBAR_ID);
    }

    let config = load_config(&container);
    let canvas = dom::create_canvas(&document, &container)?;
    let viewport = dom::viewport_of(&window);
    dom::sync_canvas_size(&canvas, &viewport);

    let scene = SceneState::new(config, viewport);
    let gpu = frame::init_gpu(&canvas, &scene).await?;
    let scene = Rc::new(RefCell::new(scene));

    // Pick up a page that was restored mid-scroll.
    events::apply_scroll(&window, &scene, navbar.as_ref());

    events::wire_pointer_move(&document, scene.clone());
    events::wire_scroll(&window, scene.clone(), navbar);
    events::wire_resize(&window, canvas.clone(), scene.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        start: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

#![cfg(target_arch = "wasm32")]

use instant::Instant;
use site_core::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod render;
mod reveal;
mod sequence;
mod viewer;
mod widgets;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        let viewport = dom::canvas_viewport(&canvas_resize);
        scene.borrow_mut().resize(viewport);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Static widgets first; they work even if the canvas is missing.
    widgets::popup::wire(&document);
    widgets::carousel::wire(&document);
    widgets::switch_demo::wire(&document);
    widgets::dial::wire(&document);
    widgets::spiral::wire(&document);
    reveal::wire(&document);
    sequence::render(&document);

    // Structure viewer loads in the background; failures stay inside its
    // container.
    spawn_local(viewer::init(VIEWER_CONTAINER_ID));

    let canvas_el = document
        .get_element_by_id(HELIX_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{HELIX_CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;

    dom::sync_canvas_backing_size(&canvas);
    let scene = Rc::new(RefCell::new(Scene::new(
        dom::canvas_viewport(&canvas),
        SCENE_SEED,
    )));
    wire_canvas_resize(&canvas, scene.clone());

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    let running = Rc::new(Cell::new(true));
    frame::wire_stop_on_pagehide(running.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        ctx,
        running,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

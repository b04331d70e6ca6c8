//! 3D structure viewer: fetches the precomputed CIF for the site's sequence
//! and hands it to the 3Dmol.js library loaded globally by the page.
//!
//! Failure surfaces as an in-place message inside the container; there is no
//! retry.

use anyhow::{anyhow, bail};
use js_sys::Reflect;
use site_core::{sequence, structure};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::*;
use crate::dom;

#[wasm_bindgen]
extern "C" {
    pub type MolViewer;

    #[wasm_bindgen(js_namespace = ["$3Dmol"], js_name = createViewer)]
    fn create_viewer(element: &web::Element, config: &JsValue) -> MolViewer;

    #[wasm_bindgen(method, js_name = addModel)]
    fn add_model(this: &MolViewer, data: &str, format: &str);

    #[wasm_bindgen(method, js_name = setStyle)]
    fn set_style(this: &MolViewer, selection: &JsValue, style: &JsValue);

    #[wasm_bindgen(method, js_name = zoomTo)]
    fn zoom_to(this: &MolViewer);

    #[wasm_bindgen(method)]
    fn zoom(this: &MolViewer, factor: f64);

    #[wasm_bindgen(method, js_name = spin)]
    fn spin_axis(this: &MolViewer, axis: &str, speed: f64);

    #[wasm_bindgen(method, js_name = spin)]
    fn spin_enabled(this: &MolViewer, on: bool);

    #[wasm_bindgen(method)]
    fn render(this: &MolViewer);
}

pub async fn init(container_id: &str) {
    if let Err(e) = run(container_id).await {
        log::error!("structure viewer: {e:?}");
        show_error(container_id);
    }
}

async fn run(container_id: &str) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let Some(container) = document.get_element_by_id(container_id) else {
        // Page without a viewer section; nothing to do.
        return Ok(());
    };

    if !library_loaded() {
        bail!("3Dmol.js not loaded");
    }

    container.set_inner_html(
        "<div style=\"position: absolute; top: 50%; left: 50%; \
         transform: translate(-50%, -50%); color: #a8a29e; font-size: 14px; \
         font-weight: 500;\">Loading 3D Structure...</div>",
    );

    let url = structure::structure_url(sequence::SEQUENCE.id);
    let cif = fetch_text(&url).await?;

    container.set_inner_html("");
    let viewer = create_viewer(&container, &viewer_config());
    viewer.add_model(&cif, "cif");

    // pLDDT coloring: the library calls back per atom with the B-factor.
    let color_fn = Closure::wrap(Box::new(|atom: JsValue| {
        let b = Reflect::get(&atom, &JsValue::from_str("b"))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        JsValue::from_str(structure::plddt_color(b))
    }) as Box<dyn Fn(JsValue) -> JsValue>);
    viewer.set_style(&js_sys::Object::new().into(), &style_config(&color_fn));
    color_fn.forget();

    viewer.zoom_to();
    viewer.zoom(structure::ZOOM_INITIAL);
    viewer.spin_axis(structure::SPIN_AXIS, structure::SPIN_SPEED);
    viewer.render();

    wire_controls(&document, &viewer);
    wire_wheel_passthrough(&container);
    Ok(())
}

fn library_loaded() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("$3Dmol")).unwrap_or(false)
}

fn viewer_config() -> JsValue {
    let config = js_sys::Object::new();
    let _ = Reflect::set(
        &config,
        &JsValue::from_str("backgroundColor"),
        &JsValue::from_str("#ffffff"),
    );
    let _ = Reflect::set(&config, &JsValue::from_str("antialias"), &JsValue::TRUE);
    config.into()
}

fn style_config(color_fn: &Closure<dyn Fn(JsValue) -> JsValue>) -> JsValue {
    let cartoon = js_sys::Object::new();
    let _ = Reflect::set(&cartoon, &JsValue::from_str("colorfunc"), color_fn.as_ref());
    let _ = Reflect::set(
        &cartoon,
        &JsValue::from_str("thickness"),
        &JsValue::from_f64(structure::CARTOON_THICKNESS),
    );
    let _ = Reflect::set(
        &cartoon,
        &JsValue::from_str("opacity"),
        &JsValue::from_f64(structure::CARTOON_OPACITY),
    );

    let stick = js_sys::Object::new();
    let _ = Reflect::set(
        &stick,
        &JsValue::from_str("radius"),
        &JsValue::from_f64(structure::STICK_RADIUS),
    );
    let _ = Reflect::set(&stick, &JsValue::from_str("colorfunc"), color_fn.as_ref());

    let style = js_sys::Object::new();
    let _ = Reflect::set(&style, &JsValue::from_str("cartoon"), &cartoon);
    let _ = Reflect::set(&style, &JsValue::from_str("stick"), &stick);
    style.into()
}

/// Spin toggle and camera reset, matching the two external controls the
/// section exposes.
fn wire_controls(document: &web::Document, viewer: &MolViewer) {
    let spinning = Rc::new(Cell::new(true));

    let viewer_spin = viewer.clone();
    let spinning_btn = spinning.clone();
    dom::add_click_listener(document, SPIN_BUTTON_ID, move || {
        let Some(doc) = dom::window_document() else {
            return;
        };
        let Some(btn) = doc.get_element_by_id(SPIN_BUTTON_ID) else {
            return;
        };
        if spinning_btn.get() {
            viewer_spin.spin_enabled(false);
            spinning_btn.set(false);
            let _ = btn.class_list().remove_1("active");
            btn.set_text_content(Some("Paused"));
        } else {
            viewer_spin.spin_axis(structure::SPIN_AXIS, structure::SPIN_SPEED);
            spinning_btn.set(true);
            let _ = btn.class_list().add_1("active");
            btn.set_text_content(Some("Spinning"));
        }
    });

    let viewer_reset = viewer.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        viewer_reset.zoom_to();
        viewer_reset.zoom(structure::ZOOM_RESET);
    });
}

/// Block the library's wheel zoom but keep the page scrolling.
fn wire_wheel_passthrough(container: &web::Element) {
    let handler = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.stop_propagation();
        ev.stop_immediate_propagation();
        if let Some(window) = web::window() {
            window.scroll_by_with_x_and_y(0.0, ev.delta_y());
        }
    }) as Box<dyn FnMut(_)>);

    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    options.set_capture(true);

    let _ = container.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        handler.as_ref().unchecked_ref(),
        &options,
    );
    if let Ok(Some(canvas)) = container.query_selector("canvas") {
        let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            handler.as_ref().unchecked_ref(),
            &options,
        );
    }
    handler.forget();
}

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch failed: {e:?}"))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow!("not a Response: {e:?}"))?;
    if !response.ok() {
        bail!("failed to load structure: {}", response.status_text());
    }
    let text = JsFuture::from(
        response
            .text()
            .map_err(|e| anyhow!("response body error: {e:?}"))?,
    )
    .await
    .map_err(|e| anyhow!("read body failed: {e:?}"))?;
    text.as_string()
        .ok_or_else(|| anyhow!("response body was not text"))
}

fn show_error(container_id: &str) {
    if let Some(document) = dom::window_document() {
        if let Some(container) = document.get_element_by_id(container_id) {
            container.set_inner_html(
                "<div style=\"position: absolute; top: 50%; left: 50%; \
                 transform: translate(-50%, -50%); color: #dc2626; font-size: 14px; \
                 font-weight: 500;\">Error loading structure</div>",
            );
        }
    }
}

//! Circular dial: pointer drags on the dial face map to a normalized value
//! that rotates the knob and rewrites the SVG response-curve path.

use glam::Vec2;
use site_core::dial;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;

pub fn wire(document: &web::Document) {
    let Some(face) = document.get_element_by_id(DIAL_ID) else {
        return;
    };

    apply_value(document, 0.5);

    let dragging = Rc::new(Cell::new(false));

    {
        let dragging = dragging.clone();
        let face_down = face.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            dragging.set(true);
            let _ = face_down.set_pointer_capture(ev.pointer_id());
            update_from_pointer(&face_down, &ev);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = face.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let dragging = dragging.clone();
        let face_move = face.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if dragging.get() {
                update_from_pointer(&face_move, &ev);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = face.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            dragging.set(false);
        }) as Box<dyn FnMut(_)>);
        let _ = face.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn update_from_pointer(face: &web::Element, ev: &web::PointerEvent) {
    let rect = face.get_bounding_client_rect();
    let center = Vec2::new(
        (rect.left() + rect.width() * 0.5) as f32,
        (rect.top() + rect.height() * 0.5) as f32,
    );
    let offset = Vec2::new(ev.client_x() as f32, ev.client_y() as f32) - center;
    let value = dial::pointer_value(offset.x, offset.y);
    if let Some(document) = crate::dom::window_document() {
        apply_value(&document, value);
    }
}

fn apply_value(document: &web::Document, value: f32) {
    if let Some(knob) = document.get_element_by_id(DIAL_KNOB_ID) {
        if let Ok(knob) = knob.dyn_into::<web::HtmlElement>() {
            let _ = knob.style().set_property(
                "transform",
                &format!("rotate({}deg)", dial::knob_angle_deg(value)),
            );
        }
    }
    if let Some(path) = document.get_element_by_id(DIAL_CHART_PATH_ID) {
        let d = dial::chart_path(value, DIAL_CHART_WIDTH, DIAL_CHART_HEIGHT, DIAL_CHART_SAMPLES);
        let _ = path.set_attribute("d", &d);
    }
    crate::dom::set_text(
        document,
        DIAL_READOUT_ID,
        &format!("{:.0}%", value * 100.0),
    );
}

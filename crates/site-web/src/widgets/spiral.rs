//! Header spiral lines: hovering a line bobs it up or down and settles it
//! back; clicking the logo breaks the halves apart before they rejoin.

use site_core::spiral;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub fn wire(document: &web::Document) {
    let lines = dom::query_elements(document, ".spiral-line");
    if lines.is_empty() {
        return;
    }

    for line in &lines {
        let line_enter = line.clone();
        let closure = Closure::wrap(Box::new(move || {
            let offset = spiral::bob_offset(js_sys::Math::random() as f32);
            set_translate_y(&line_enter, offset, spiral::BOB_DURATION_MS);
            reset_after(line_enter.clone(), spiral::BOB_RESET_MS);
        }) as Box<dyn FnMut()>);
        let _ =
            line.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let Ok(Some(logo)) = document.query_selector("header img") else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        let total = lines.len();
        for (i, line) in lines.iter().enumerate() {
            set_translate_y(line, spiral::break_offset(i, total), spiral::BREAK_DURATION_MS);
            reset_after(line.clone(), spiral::BREAK_RESET_MS);
        }
    }) as Box<dyn FnMut()>);
    let _ = logo.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn set_translate_y(el: &web::Element, offset_px: f32, duration_ms: i32) {
    let Some(el) = el.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    let style = el.style();
    let _ = style.set_property(
        "transition",
        &format!("transform {duration_ms}ms ease-in-out"),
    );
    let _ = style.set_property("transform", &format!("translateY({offset_px}px)"));
}

/// Settle the element back to its resting position once the transition has
/// had time to play out.
fn reset_after(el: web::Element, delay_ms: i32) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
            let _ = el.style().set_property("transform", "translateY(0px)");
        }
    }) as Box<dyn FnMut()>);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}

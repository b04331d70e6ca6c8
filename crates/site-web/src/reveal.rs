//! Scroll reveal: elements tagged `data-reveal` gain a `revealed` class the
//! first time they intersect the viewport, after an optional `data-delay`
//! in milliseconds.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::REVEAL_THRESHOLD;
use crate::dom;

pub fn wire(document: &web::Document) {
    let elements = dom::query_elements(document, "[data-reveal]");
    if elements.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                let delay = el
                    .get_attribute("data-delay")
                    .and_then(|d| d.parse::<i32>().ok())
                    .unwrap_or(0);
                reveal_after(el.clone(), delay);
                observer.unobserve(&el);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {e:?}");
            return;
        }
    };
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }
}

fn reveal_after(el: web::Element, delay_ms: i32) {
    let Some(window) = web::window() else { return };
    if delay_ms <= 0 {
        let _ = el.class_list().add_1("revealed");
        return;
    }
    let closure = Closure::wrap(Box::new(move || {
        let _ = el.class_list().add_1("revealed");
    }) as Box<dyn FnMut()>);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}

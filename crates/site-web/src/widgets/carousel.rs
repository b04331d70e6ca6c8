//! Carousel indicators: a scroll listener on the track recomputes the
//! active dot from the scroll offset.

use site_core::carousel;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom;

pub fn wire(document: &web::Document) {
    let Some(track) = document.get_element_by_id(CAROUSEL_TRACK_ID) else {
        return;
    };
    let dots = dom::query_elements(document, CAROUSEL_DOT_SELECTOR);
    if dots.is_empty() {
        return;
    }

    sync_dots(&track, &dots);

    let track_for_scroll = track.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_dots(&track_for_scroll, &dots);
    }) as Box<dyn FnMut()>);
    let _ = track.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn sync_dots(track: &web::Element, dots: &[web::Element]) {
    // One slide per viewport: the stride is the track's client width.
    let stride = track.client_width() as f32;
    let active = carousel::active_indicator(track.scroll_left() as f32, stride, dots.len());
    for (i, dot) in dots.iter().enumerate() {
        dom::set_class_enabled(dot, "active", i == active);
    }
}

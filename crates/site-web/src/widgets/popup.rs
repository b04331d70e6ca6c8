//! Advisor bio popup: cards carry `data-advisor` ids, clicking one fills the
//! popup from the static registry and toggles its visibility class.

use site_core::advisors;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom;

pub fn wire(document: &web::Document) {
    for card in dom::query_elements(document, "[data-advisor]") {
        let Some(id) = card.get_attribute("data-advisor") else {
            continue;
        };
        let closure = Closure::wrap(Box::new(move || {
            if let Some(doc) = dom::window_document() {
                open(&doc, &id);
            }
        }) as Box<dyn FnMut()>);
        let _ = card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    dom::add_click_listener(document, POPUP_CLOSE_ID, || {
        if let Some(doc) = dom::window_document() {
            close(&doc);
        }
    });
    // Clicking the backdrop (the popup element itself) also dismisses.
    if let Some(popup) = document.get_element_by_id(POPUP_ID) {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let hit_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .map(|el| el.id() == POPUP_ID)
                .unwrap_or(false);
            if hit_backdrop {
                if let Some(doc) = dom::window_document() {
                    close(&doc);
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = popup.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn open(document: &web::Document, id: &str) {
    let Some(advisor) = advisors::advisor_by_id(id) else {
        log::warn!("unknown advisor id {id:?}");
        return;
    };
    dom::set_text(document, POPUP_NAME_ID, advisor.name);
    dom::set_text(document, POPUP_TITLE_ID, advisor.title);
    dom::set_text(document, POPUP_BIO_ID, advisor.bio);
    if let Some(photo) = document.get_element_by_id(POPUP_PHOTO_ID) {
        let _ = photo.set_attribute("src", advisor.image);
        let _ = photo.set_attribute("alt", advisor.name);
    }
    dom::add_class(document, POPUP_ID, "visible");
}

fn close(document: &web::Document) {
    dom::remove_class(document, POPUP_ID, "visible");
}

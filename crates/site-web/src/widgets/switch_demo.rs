//! Transcription-factor switch demo: a toggle binds/releases the factor,
//! flipping the promoter's `bound` class and the reporter's `expressing`
//! class.

use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::*;
use crate::dom;

pub fn wire(document: &web::Document) {
    if document.get_element_by_id(SWITCH_TOGGLE_ID).is_none() {
        return;
    }
    let bound = Rc::new(Cell::new(false));
    apply(document, bound.get());

    let bound_click = bound.clone();
    dom::add_click_listener(document, SWITCH_TOGGLE_ID, move || {
        bound_click.set(!bound_click.get());
        if let Some(doc) = dom::window_document() {
            apply(&doc, bound_click.get());
        }
    });
}

fn apply(document: &web::Document, bound: bool) {
    if let Some(promoter) = document.get_element_by_id(SWITCH_PROMOTER_ID) {
        dom::set_class_enabled(&promoter, "bound", bound);
    }
    if let Some(reporter) = document.get_element_by_id(SWITCH_REPORTER_ID) {
        dom::set_class_enabled(&reporter, "expressing", bound);
    }
    dom::set_text(
        document,
        SWITCH_TOGGLE_ID,
        if bound { "Release factor" } else { "Bind factor" },
    );
}

//! Renders the chunked, motif-highlighted sequence into its container.

use site_core::sequence;
use web_sys as web;

use crate::constants::SEQUENCE_CONTAINER_ID;

pub fn render(document: &web::Document) {
    let Some(container) = document.get_element_by_id(SEQUENCE_CONTAINER_ID) else {
        return;
    };

    let mut html = String::new();
    for chunk in sequence::chunked_sequence() {
        html.push_str("<div class=\"seq-chunk\">");
        html.push_str(&format!(
            "<span class=\"chunk-label\">{}</span><span class=\"chunk-bases\">",
            chunk.label
        ));
        for cell in &chunk.bases {
            match &cell.highlight {
                Some(h) => html.push_str(&format!(
                    "<span style=\"background-color: {}; color: #1c1917; font-weight: 700; \
                     border-radius: 2px; cursor: help;\" title=\"{}\">{}</span>",
                    h.color, h.motif, cell.base
                )),
                None => html.push_str(&format!("<span>{}</span>", cell.base)),
            }
        }
        html.push_str("</span></div>");
    }
    container.set_inner_html(&html);
}

use web_sys as web;

/// Put a message in the status overlay (project name, load progress, errors).
pub fn show_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id("status-overlay") {
        el.set_text_content(Some(text));
        _ = el.set_attribute("style", "");
    }
}

pub fn hide_status(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("status-overlay") {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Terminal state: no usable pose source or renderer on this device.
pub fn show_unsupported(document: &web::Document) {
    show_status(
        document,
        "This browser cannot provide device pose tracking or WebGPU; the card ring cannot run here.",
    );
}

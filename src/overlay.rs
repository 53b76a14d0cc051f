use crate::constants::{HIDDEN_CLASS, LOADING_ELEMENT_ID, MESSAGE_ELEMENT_ID};
use web_sys as web;

#[inline]
fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1(HIDDEN_CLASS);
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    } else {
        _ = cl.remove_1(HIDDEN_CLASS);
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn set_loading(document: &web::Document, loading: bool) {
    if let Some(el) = document.get_element_by_id(LOADING_ELEMENT_ID) {
        set_hidden(&el, !loading);
    }
}

/// Show `message`, or hide the message box when there is none.
pub fn set_message(document: &web::Document, message: Option<&str>) {
    if let Some(el) = document.get_element_by_id(MESSAGE_ELEMENT_ID) {
        el.set_text_content(message);
        set_hidden(&el, message.is_none());
    }
}

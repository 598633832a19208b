//! Shows/hides the role-selection overlay and the welcome panel. All DOM
//! changes go through style/text attributes; layout itself lives in the
//! host page.

use app_core::Role;
use web_sys as web;

#[inline]
pub fn hide_selection(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("role-selection") {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn mark_card_selected(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.class_list().add_1("selected").ok();
    }
}

/// Swap the cards out for the welcome panel with role-specific copy.
pub fn show_welcome(document: &web::Document, role: Role) {
    hide_selection(document);
    if let Some(el) = document.get_element_by_id("welcome-panel") {
        let _ = el.set_attribute("style", "");
    }
    let title = match role {
        Role::Tailor => "Welcome, Creative Tailor!",
        Role::Customer => "Welcome, Style Explorer!",
    };
    crate::dom::set_text(document, "welcome-title", title);
}

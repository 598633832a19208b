use crate::input;
use crate::overlay;
use app_core::{Role, SelectionView};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer on the whole window so the backdrop keeps reacting
/// even while the cursor is over the UI overlay.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    mouse: Rc<RefCell<input::MouseState>>,
) {
    let canvas_m = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_m);
        let mut ms = mouse.borrow_mut();
        ms.x = pos.x;
        ms.y = pos.y;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ =
            wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Wire both role cards: a click records the role on the selection view
/// (the view itself owns the delayed screen flip).
pub fn wire_role_cards(
    document: &web::Document,
    selection: Rc<RefCell<SelectionView>>,
    started: Rc<Instant>,
) {
    for (element_id, role) in [
        ("role-tailor", Role::Tailor),
        ("role-customer", Role::Customer),
    ] {
        let selection = selection.clone();
        let started = started.clone();
        crate::dom::add_click_listener(document, element_id, move || {
            let now_sec = started.elapsed().as_secs_f64();
            selection.borrow_mut().select(role, now_sec);
            if let Some(doc) = crate::dom::window_document() {
                overlay::mark_card_selected(&doc, element_id);
            }
        });
        wire_card_tilt(document, element_id);
    }
}

/// Hover tilt on a card: lean toward the pointer, snap back on leave.
fn wire_card_tilt(document: &web::Document, element_id: &str) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    {
        let el_move = el.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = el_move.get_bounding_client_rect();
            let (w, h) = (rect.width(), rect.height());
            if w <= 0.0 || h <= 0.0 {
                return;
            }
            let u = (ev.client_x() as f64 - rect.left()) / w - 0.5;
            let v = (ev.client_y() as f64 - rect.top()) / h - 0.5;
            let style = format!(
                "transform: perspective(600px) rotateX({:.2}deg) rotateY({:.2}deg)",
                -v * 10.0,
                u * 10.0
            );
            let _ = el_move.set_attribute("style", &style);
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let el_leave = el.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let _ = el_leave.set_attribute("style", "");
        }) as Box<dyn FnMut(_)>);
        let _ =
            el.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

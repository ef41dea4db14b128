use crate::constants::{CURSOR_SELECTOR, HOVER_CLASS};
use crate::core::cursor::{CursorPosition, HoverEvent};
use crate::dom;
use web_sys as web;

pub fn wire_cursor(document: &web::Document, hoverable_selector: &str) {
    let Some(cursor) = dom::query(document, CURSOR_SELECTOR) else {
        log::warn!("[cursor] {CURSOR_SELECTOR} missing; follower disabled");
        return;
    };

    let follower = cursor.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let pos = CursorPosition::from_page(f64::from(ev.page_x()), f64::from(ev.page_y()));
        _ = follower.set_attribute("style", &pos.style());
    });

    let hoverables = dom::query_all(document, hoverable_selector);
    for el in &hoverables {
        for kind in ["mouseover", "mouseout"] {
            let follower = cursor.clone();
            dom::add_listener(el, kind, move |ev: web::Event| {
                let Some(hover) = HoverEvent::from_event_type(&ev.type_()) else {
                    return;
                };
                let cl = follower.class_list();
                _ = if hover.is_hovering() {
                    cl.add_1(HOVER_CLASS)
                } else {
                    cl.remove_1(HOVER_CLASS)
                };
            });
        }
    }
    log::info!("[cursor] follower wired, {} hoverables", hoverables.len());
}

use crate::constants::HEADER_SELECTOR;
use crate::core::header::{HeaderTracker, HeaderVisibility};
use crate::dom;
use web_sys as web;

pub fn wire_header(window: &web::Window, document: &web::Document, threshold: f64, hidden_top: &str) {
    let Some(header) = dom::query(document, HEADER_SELECTOR) else {
        log::warn!("[header] <{HEADER_SELECTOR}> missing; auto-hide disabled");
        return;
    };
    let mut tracker = HeaderTracker::new(threshold);
    let hidden_top = hidden_top.to_string();
    let wnd = window.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        let offset = dom::scroll_top(&wnd);
        let top = match tracker.on_scroll(offset) {
            HeaderVisibility::Hidden => hidden_top.as_str(),
            HeaderVisibility::Shown => "0",
        };
        dom::set_style_property(&header, "top", top);
    });
    log::info!("[header] auto-hide wired, threshold={threshold}");
}

use crate::constants::{
    HAMBURGER_ICON_SELECTOR, HAMBURGER_SELECTOR, NAV_LINK_SELECTOR, NAV_OPEN_CLASS, NAV_SELECTOR,
};
use crate::core::nav::NavState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct NavElements {
    nav: web::Element,
    icon: Option<web::Element>,
}

impl NavElements {
    fn render(&self, state: &NavState) {
        let cl = self.nav.class_list();
        _ = if state.is_open() {
            cl.add_1(NAV_OPEN_CLASS)
        } else {
            cl.remove_1(NAV_OPEN_CLASS)
        };
        if let Some(icon) = &self.icon {
            let glyph = state.glyph();
            dom::swap_class(icon, glyph.other().class_name(), glyph.class_name());
        }
    }
}

pub fn wire_nav(document: &web::Document) {
    let (Some(hamburger), Some(nav)) = (
        dom::query(document, HAMBURGER_SELECTOR),
        dom::query(document, NAV_SELECTOR),
    ) else {
        log::warn!("[nav] {HAMBURGER_SELECTOR} or <{NAV_SELECTOR}> missing; menu disabled");
        return;
    };
    let elements = Rc::new(NavElements {
        icon: dom::query_in(&hamburger, HAMBURGER_ICON_SELECTOR),
        nav,
    });
    let state = Rc::new(RefCell::new(NavState::default()));

    {
        let (elements, state) = (elements.clone(), state.clone());
        dom::add_click_listener(&hamburger, move || {
            let mut s = state.borrow_mut();
            s.toggle_menu();
            elements.render(&s);
            log::debug!("[nav] open={}", s.is_open());
        });
    }

    let links = dom::query_all_in(&elements.nav, NAV_LINK_SELECTOR);
    for link in &links {
        let (elements, state) = (elements.clone(), state.clone());
        dom::add_click_listener(link, move || {
            let mut s = state.borrow_mut();
            s.close_menu();
            elements.render(&s);
        });
    }
    log::info!("[nav] menu wired, {} links", links.len());
}

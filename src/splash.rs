use crate::constants::{HIDDEN_CLASS, LOADING_CLASS, SPLASH_ID};
use crate::core::splash::SplashController;
use crate::dom;
use crate::reveal::SectionReveal;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mark the page as loading and schedule the reveal. Without a splash
/// element the reveal runs before this returns.
pub fn wire_splash(document: &web::Document, delay_ms: u32, reveal: SectionReveal) {
    let splash = document.get_element_by_id(SPLASH_ID);
    let controller = Rc::new(RefCell::new(SplashController::new(splash.is_some(), delay_ms)));
    let body = document.body();
    if let Some(body) = &body {
        _ = body.class_list().add_1(LOADING_CLASS);
    }

    let finish = {
        let controller = controller.clone();
        move || {
            if !controller.borrow_mut().reveal() {
                return;
            }
            if let Some(body) = &body {
                _ = body.class_list().remove_1(LOADING_CLASS);
            }
            if let Some(splash) = &splash {
                _ = splash.class_list().add_1(HIDDEN_CLASS);
            }
            log::debug!("[splash] revealed");
            reveal.activate();
        }
    };

    let delay = controller.borrow().initial_delay();
    match delay {
        Some(ms) => {
            log::info!("[splash] revealing in {ms} ms");
            dom::set_timeout(ms, finish);
        }
        None => {
            log::warn!("[splash] #{SPLASH_ID} missing; revealing immediately");
            finish();
        }
    }
}

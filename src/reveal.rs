use crate::constants::{SECTION_SELECTOR, VISIBLE_CLASS};
use crate::core::reveal::RevealTracker;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Section reveal that stays inert until [`SectionReveal::activate`].
pub struct SectionReveal {
    sections: Rc<Vec<web::Element>>,
    tracker: Rc<RefCell<RevealTracker>>,
}

impl SectionReveal {
    pub fn new(document: &web::Document, threshold: f64) -> Self {
        let sections = dom::query_all(document, SECTION_SELECTOR);
        if sections.is_empty() {
            log::warn!("[reveal] no {SECTION_SELECTOR} elements");
        }
        let tracker = RevealTracker::new(sections.len(), threshold);
        Self {
            sections: Rc::new(sections),
            tracker: Rc::new(RefCell::new(tracker)),
        }
    }

    /// Start observing. Repeated calls are ignored.
    pub fn activate(&self) {
        if !self.tracker.borrow_mut().activate() || self.sections.is_empty() {
            return;
        }
        if let Err(e) = self.observe() {
            log::warn!("[reveal] IntersectionObserver unavailable: {e}");
        }
    }

    fn observe(&self) -> anyhow::Result<()> {
        let sections = self.sections.clone();
        let tracker = self.tracker.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = sections.iter().position(|s| *s == target) else {
                        continue;
                    };
                    let revealed = tracker.borrow_mut().observe(
                        index,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    );
                    if revealed {
                        _ = target.class_list().add_1(VISIBLE_CLASS);
                        observer.unobserve(&target);
                        log::debug!("[reveal] section {index} visible");
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.tracker.borrow().threshold()));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        callback.forget();

        for section in self.sections.iter() {
            observer.observe(section);
        }
        log::info!("[reveal] observing {} sections", self.sections.len());
        Ok(())
    }
}

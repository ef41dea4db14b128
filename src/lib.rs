#![cfg(target_arch = "wasm32")]
use crate::constants::HEADER_THRESHOLD_ATTR;
use crate::core::SiteConfig;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod cursor;
mod dom;
mod header;
mod nav;
mod particles;
mod reveal;
mod splash;
mod theme;

fn site_config(document: &web::Document) -> SiteConfig {
    let mut config = SiteConfig::default();
    let raw = document
        .body()
        .and_then(|b| b.get_attribute(HEADER_THRESHOLD_ATTR));
    if let Some(raw) = raw {
        if !config.override_header_threshold(&raw) {
            log::warn!("[config] ignoring {HEADER_THRESHOLD_ATTR}={raw:?}");
        }
    }
    config
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::add_listener(&document, "DOMContentLoaded", |_: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = site_config(&document);

    let initial = theme::wire_theme(&window, &document, &config);
    particles::init(&config.particles_container, initial);

    // Sections are revealed only once the splash has gone.
    let reveal = reveal::SectionReveal::new(&document, config.reveal_threshold);
    splash::wire_splash(&document, config.splash_delay_ms, reveal);

    cursor::wire_cursor(&document, &config.hoverable_selector);
    nav::wire_nav(&document);
    header::wire_header(
        &window,
        &document,
        config.header_threshold,
        &config.header_hidden_top,
    );

    log::info!("folio-web ready");
    Ok(())
}

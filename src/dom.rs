use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

fn collect(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    collect(root.query_selector_all(selector))
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect(root.query_selector_all(selector))
}

/// Attach a listener for the page lifetime.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    add_listener(el, "click", move |_: web::Event| handler());
}

/// Replace the class list entry `from` with `to`, adding `to` if absent.
#[inline]
pub fn swap_class(el: &web::Element, from: &str, to: &str) {
    let cl = el.class_list();
    _ = cl.remove_1(from);
    _ = cl.add_1(to);
}

pub fn set_style_property(el: &web::Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(name, value);
    }
}

/// Vertical scroll offset of the window, falling back to the root element.
pub fn scroll_top(window: &web::Window) -> f64 {
    match window.scroll_y() {
        Ok(y) => y,
        Err(_) => window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| f64::from(el.scroll_top()))
            .unwrap_or(0.0),
    }
}

pub fn set_timeout(millis: u32, callback: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, callback).forget();
}

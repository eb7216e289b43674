// Console + small DOM helpers shared across components.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Storage,
};

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

/// Moves keyboard focus to the element with the given id, if it exists.
pub fn focus_element(id: &str) -> bool {
    match element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        Some(el) => el.focus().is_ok(),
        None => false,
    }
}

/// Smooth-scrolls the element with the given id to the top of the viewport
/// (the scroll-padding set by the nav keeps it below the fixed header).
pub fn smooth_scroll_to(id: &str) -> bool {
    let Some(el) = element_by_id(id) else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

/// Scroll to an in-page section and record the fragment without adding a
/// history entry (single page: back should leave the site, not replay jumps).
pub fn jump_to_section(id: &str) {
    if !smooth_scroll_to(id) {
        cwarn(&format!("jump target #{id} not found"));
        return;
    }
    if let Some(win) = web_sys::window() {
        if let Ok(history) = win.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")));
        }
    }
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

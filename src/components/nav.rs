use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::util;

const LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

const NAV_HEIGHT_DESKTOP: u32 = 85;
const NAV_HEIGHT_MOBILE: u32 = 100;
const MOBILE_BREAKPOINT: f64 = 768.0;

/// Writes the nav height into `--nav-height` and `scroll-padding-top` so
/// anchored sections land below the fixed header.
fn apply_scroll_offset() {
    let Some(win) = web_sys::window() else {
        return;
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1024.0);
    let offset = if width <= MOBILE_BREAKPOINT { NAV_HEIGHT_MOBILE } else { NAV_HEIGHT_DESKTOP };
    let Some(root) = util::document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        util::cwarn("document element unavailable; scroll offset not applied");
        return;
    };
    let style = root.style();
    let _ = style.set_property("--nav-height", &format!("{offset}px"));
    let _ = style.set_property("scroll-padding-top", &format!("{offset}px"));
}

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = util::document().and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);

    // Keep the scroll offset in sync with the viewport width.
    use_effect_with((), move |_| {
        apply_scroll_offset();
        let window = web_sys::window();
        let resize_cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            apply_scroll_offset();
        }) as Box<dyn FnMut(_)>);
        if let Some(win) = &window {
            let _ = win
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        }
        move || {
            if let Some(win) = &window {
                let _ = win.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
            }
            drop(resize_cb);
        }
    });

    // Body scroll lock follows the menu, and while the menu is open a
    // document-level Escape or outside click closes it.
    {
        let menu_open = menu_open.clone();
        use_effect_with(*menu_open, move |open| {
            set_body_scroll_locked(*open);
            let document = util::document();
            let mut listeners = None;
            if *open {
                let key_cb = {
                    let menu_open = menu_open.clone();
                    Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                        if e.key() == "Escape" {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(_)>)
                };
                let click_cb = {
                    let menu_open = menu_open.clone();
                    Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                        let inside = e
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                            .and_then(|el| el.closest("#site-nav").ok())
                            .flatten()
                            .is_some();
                        if !inside {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(_)>)
                };
                if let Some(doc) = &document {
                    let _ = doc.add_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                    let _ = doc.add_event_listener_with_callback(
                        "click",
                        click_cb.as_ref().unchecked_ref(),
                    );
                }
                listeners = Some((key_cb, click_cb));
            }
            move || {
                if let (Some(doc), Some((key_cb, click_cb))) = (&document, &listeners) {
                    let _ = doc.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                    let _ = doc.remove_event_listener_with_callback(
                        "click",
                        click_cb.as_ref().unchecked_ref(),
                    );
                }
                set_body_scroll_locked(false);
                drop(listeners);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    let nav_links = LINKS.iter().map(|(section, label)| {
        let follow = {
            let menu_open = menu_open.clone();
            let section = *section;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                util::jump_to_section(section);
                menu_open.set(false);
            })
        };
        html! {
            <li key={*section}>
                <a class="nav-link" href={format!("#{section}")} onclick={follow}>{ *label }</a>
            </li>
        }
    });

    html! {
        <nav id="site-nav" class="site-nav">
            <div class="container nav-inner">
                <a class="nav-brand" href="#home" onclick={{
                    let menu_open = menu_open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        util::jump_to_section("home");
                        menu_open.set(false);
                    })
                }}>{"MK"}</a>
                <button
                    id="hamburger"
                    class={classes!("hamburger", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation menu"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span></span><span></span><span></span>
                </button>
                <ul id="nav-links" class={classes!("nav-links", (*menu_open).then_some("active"))}>
                    { for nav_links }
                </ul>
            </div>
        </nav>
    }
}

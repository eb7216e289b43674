use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::contact_form::ContactSection;
use super::footer::Footer;
use super::hero::Hero;
use super::nav::NavBar;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;
use super::theme_toggle::ThemeToggle;
use crate::state::view::{self, StoreHandle, ViewStore};
use crate::theme::{self, Theme, ThemePreference};
use crate::util;

#[function_component(App)]
pub fn app() -> Html {
    // One store for the page, handed to the components that need it.
    let store = use_memo((), |_| ViewStore::new());

    let preference = use_state(ThemePreference::default);
    // Mirror for the media-query listener, which outlives any one render.
    let preference_ref = use_mut_ref(ThemePreference::default);

    // Load the stored preference once; a fresh visit stays in Auto.
    {
        let preference = preference.clone();
        use_effect_with((), move |_| {
            let stored = theme::load_preference();
            if stored != *preference {
                preference.set(stored);
            }
            || ()
        });
    }

    // Apply on every preference change.
    {
        let preference_ref = preference_ref.clone();
        use_effect_with(*preference, move |pref| {
            *preference_ref.borrow_mut() = *pref;
            theme::apply(pref.resolve(theme::system_prefers_dark()));
            || ()
        });
    }

    // System theme changes only matter while the preference is Auto.
    {
        let preference_ref = preference_ref.clone();
        use_effect_with((), move |_| {
            let mql = web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
                .flatten();
            let change_cb = Closure::wrap(Box::new(move |e: web_sys::MediaQueryListEvent| {
                if *preference_ref.borrow() == ThemePreference::Auto {
                    theme::apply(if e.matches() { Theme::Dark } else { Theme::Light });
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(m) = &mql {
                let _ = m
                    .add_event_listener_with_callback("change", change_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(m) = &mql {
                    let _ = m.remove_event_listener_with_callback(
                        "change",
                        change_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(change_cb);
            }
        });
    }

    // Startup fragment: `#project-<id>` reopens that detail view, any other
    // fragment scrolls to its section.
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            if let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) {
                if let Some(id) = view::project_in_fragment(&hash) {
                    store.open(id, None);
                } else if let Some(section) = hash.strip_prefix('#') {
                    if !section.is_empty() && !util::smooth_scroll_to(section) {
                        util::cwarn(&format!("startup fragment #{section} matches no section"));
                    }
                }
            }
            || ()
        });
    }

    let on_cycle = {
        let preference = preference.clone();
        Callback::from(move |()| {
            let next = preference.cycle();
            theme::store_preference(next);
            util::clog(&format!("theme preference changed to {}", next.as_str()));
            preference.set(next);
        })
    };

    let resolved = preference.resolve(theme::system_prefers_dark());

    html! {
        <>
            <NavBar />
            <main id="main-content">
                <Hero />
                <SkillsSection />
                <ProjectsSection store={StoreHandle(store.clone())} />
                <ContactSection />
            </main>
            <Footer />
            <ThemeToggle preference={*preference} resolved={resolved} on_cycle={on_cycle} />
        </>
    }
}

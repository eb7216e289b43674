use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::project_detail::ProjectDetail;
use crate::model;
use crate::state::view::{self, ProjectId, StoreEvent, StoreHandle};
use crate::state::ImagePreloader;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectsProps {
    pub store: StoreHandle,
}

/// Projects section: renders the card grid or the open detail view from the
/// store snapshot, and keeps the browser history/URL fragment in sync with
/// open/close transitions.
#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsProps) -> Html {
    let preloader = use_mut_ref(ImagePreloader::new);
    // History entries this section pushed; UI closes unwind through
    // history.back() only while we own one.
    let pushed = use_mut_ref(|| 0usize);
    let update = use_force_update();

    // Single store subscription: re-render on every transition, and push a
    // `#project-<id>` entry when an open isn't already reflected in the URL
    // (restores from the startup fragment keep their existing entry).
    {
        let store = props.store.clone();
        let pushed = pushed.clone();
        use_effect_with((), move |_| {
            let sub = {
                let pushed = pushed.clone();
                store.subscribe(move |event| {
                    if let StoreEvent::Opened { id } = event {
                        if let Some(win) = web_sys::window() {
                            let current = win.location().hash().unwrap_or_default();
                            let fragment = view::fragment_for(id);
                            if current != fragment {
                                if let Ok(history) = win.history() {
                                    let ok = history
                                        .push_state_with_url(&JsValue::NULL, "", Some(&fragment))
                                        .is_ok();
                                    if ok {
                                        *pushed.borrow_mut() += 1;
                                    }
                                }
                            }
                        }
                    }
                    update.force_update();
                })
            };
            let store = store.clone();
            move || store.unsubscribe(sub)
        });
    }

    // Browser back unwinds the detail view.
    {
        let store = props.store.clone();
        let pushed = pushed.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let pop_cb = {
                let store = store.clone();
                Closure::wrap(Box::new(move |_: web_sys::PopStateEvent| {
                    let mut owned = pushed.borrow_mut();
                    *owned = owned.saturating_sub(1);
                    drop(owned);
                    if store.snapshot().is_detail_view() {
                        store.go_back();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(win) = &window {
                let _ = win
                    .add_event_listener_with_callback("popstate", pop_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "popstate",
                        pop_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(pop_cb);
            }
        });
    }

    // UI close (back button, Escape): route through the browser history when
    // we own an entry so URL and state stay in sync; otherwise close the
    // store directly and tidy the fragment.
    let request_close = {
        let store = props.store.clone();
        let pushed = pushed.clone();
        Callback::from(move |()| {
            if *pushed.borrow() > 0 {
                if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                    let _ = history.back();
                    return;
                }
            }
            store.close();
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(&JsValue::NULL, "", Some("#projects"));
            }
        })
    };

    let on_open = {
        let store = props.store.clone();
        Callback::from(move |(id, card_id): (ProjectId, String)| {
            store.open(id, Some(card_id));
        })
    };

    let on_prefetch = {
        let preloader = preloader.clone();
        Callback::from(move |id: ProjectId| {
            if let Some(record) = model::project(id) {
                preloader.borrow_mut().schedule(record);
            }
        })
    };

    let snapshot = props.store.snapshot();
    let open_record = snapshot.current.and_then(model::project);

    html! {
        <section id="projects" class="section">
            <div class="container">
                <h2 class="section-title">{"Projects"}</h2>
                {
                    match open_record {
                        Some(record) => html! {
                            <ProjectDetail
                                record={record}
                                origin={snapshot.origin.clone()}
                                on_close={request_close.clone()}
                            />
                        },
                        None => html! {
                            <div id="projects-grid" class="projects-grid">
                                { for model::projects().iter().map(|record| html! {
                                    <ProjectCard
                                        key={record.id}
                                        record={record}
                                        on_open={on_open.clone()}
                                        on_prefetch={on_prefetch.clone()}
                                    />
                                }) }
                            </div>
                        },
                    }
                }
            </div>
        </section>
    }
}

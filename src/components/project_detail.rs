use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::lightbox::Lightbox;
use crate::model::ProjectRecord;
use crate::render;
use crate::state::lightbox::{LightboxAction, LightboxImage, LightboxState};
use crate::state::visibility::{self, IntersectionTracker, Section, VisibilityTracker};
use crate::util;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectDetailProps {
    pub record: &'static ProjectRecord,
    /// DOM id of the card that opened this view; revalidated on close.
    pub origin: Option<String>,
    pub on_close: Callback<()>,
}

/// Expanded single-project view. Owns the jump-list highlighting, the sticky
/// back button, keyboard close, the gallery lightbox, and focus restoration
/// back to the originating card.
#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let record = props.record;
    let active = use_state(|| None::<Section>);
    let sticky_back = use_state(|| false);
    let lightbox = use_reducer(LightboxState::default);
    let lightbox_open = use_mut_ref(|| false);

    // Mirror for the long-lived key handler below.
    {
        let lightbox_open = lightbox_open.clone();
        use_effect_with(lightbox.open, move |open| {
            *lightbox_open.borrow_mut() = *open;
            || ()
        });
    }

    // Per-record lifecycle: move focus to the heading, watch the subsections
    // for jump-list highlighting, watch the header for the sticky back
    // button. Cleanup releases the observers and restores focus/scroll to
    // the origin card, or, when the card no longer exists, brings the
    // projects grid back into view without throwing.
    {
        let active = active.clone();
        let sticky_back = sticky_back.clone();
        let origin = props.origin.clone();
        use_effect_with(record.id, move |_| {
            if !util::focus_element("detail-title") {
                util::cwarn("detail heading missing; focus not moved");
            }

            let ratios: Rc<RefCell<Vec<(Section, f64)>>> = Rc::new(RefCell::new(Vec::new()));
            let section_tracker = IntersectionTracker::for_sections({
                let active = active.clone();
                let ratios = ratios.clone();
                move |changes| {
                    let mut known = ratios.borrow_mut();
                    for change in &changes {
                        let Some(section) = Section::from_id(&change.id) else {
                            continue;
                        };
                        match known.iter_mut().find(|(s, _)| *s == section) {
                            Some(entry) => entry.1 = change.ratio,
                            None => known.push((section, change.ratio)),
                        }
                    }
                    active.set(visibility::select_active(&known));
                }
            });
            match &section_tracker {
                Some(tracker) => {
                    for section in Section::ALL {
                        match util::element_by_id(section.id()) {
                            Some(el) => tracker.observe(&el),
                            None => util::cwarn(&format!("detail section #{} missing", section.id())),
                        }
                    }
                }
                None => util::cwarn("IntersectionObserver unavailable; jump-list highlighting disabled"),
            }

            let header_tracker = IntersectionTracker::for_header({
                let sticky_back = sticky_back.clone();
                move |changes| {
                    if let Some(change) = changes.last() {
                        sticky_back.set(!change.visible);
                    }
                }
            });
            if let Some(tracker) = &header_tracker {
                match util::element_by_id("project-detail-header") {
                    Some(el) => tracker.observe(&el),
                    None => util::cwarn("detail header missing; sticky back button disabled"),
                }
            }

            move || {
                if let Some(tracker) = &section_tracker {
                    tracker.disconnect();
                }
                if let Some(tracker) = &header_tracker {
                    tracker.disconnect();
                }
                let restored = origin
                    .as_deref()
                    .map(|card_id| util::focus_element(card_id) && util::smooth_scroll_to(card_id))
                    .unwrap_or(false);
                if !restored {
                    util::smooth_scroll_to("projects");
                }
            }
        });
    }

    // Document-level keyboard: Escape closes the lightbox first, then the
    // detail view; arrows page through an open lightbox.
    {
        let on_close = props.on_close.clone();
        let dispatcher = lightbox.dispatcher();
        let lightbox_open = lightbox_open.clone();
        use_effect_with((), move |_| {
            let document = util::document();
            let key_cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                let in_lightbox = *lightbox_open.borrow();
                match e.key().as_str() {
                    "Escape" => {
                        if in_lightbox {
                            dispatcher.dispatch(LightboxAction::Close);
                        } else {
                            on_close.emit(());
                        }
                    }
                    "ArrowLeft" if in_lightbox => dispatcher.dispatch(LightboxAction::Prev),
                    "ArrowRight" if in_lightbox => dispatcher.dispatch(LightboxAction::Next),
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(doc) = &document {
                let _ = doc
                    .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(doc) = &document {
                    let _ = doc.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(key_cb);
            }
        });
    }

    let back = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let open_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |index: usize| {
            let images = render::detail_images(record)
                .into_iter()
                .map(|g| LightboxImage { src: g.src, alt: g.alt, caption: g.caption })
                .collect();
            lightbox.dispatch(LightboxAction::Open { images, index });
        })
    };

    let jump_links = Section::ALL.into_iter().map(|section| {
        let follow = {
            let active = active.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                util::smooth_scroll_to(section.id());
                active.set(Some(section));
            })
        };
        html! {
            <li key={section.id()}>
                <a
                    class={classes!("detail-nav-link", (*active == Some(section)).then_some("active"))}
                    href={format!("#{}", section.id())}
                    onclick={follow}
                >{ section.label() }</a>
            </li>
        }
    });

    let gallery = render::detail_images(record).into_iter().enumerate().map(|(i, image)| {
        let open_click = {
            let cb = open_lightbox.clone();
            Callback::from(move |_: MouseEvent| cb.emit(i))
        };
        let open_key = {
            let cb = open_lightbox.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" || e.key() == " " {
                    e.prevent_default();
                    cb.emit(i);
                }
            })
        };
        html! {
            <figure
                id={render::gallery_item_id(i)}
                key={image.src.clone()}
                class="gallery-item"
                tabindex="0"
                role="button"
                aria-label={format!("View image: {}", image.caption)}
                onclick={open_click}
                onkeydown={open_key}
            >
                <img class="gallery-img" src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
                <figcaption class="gallery-caption">{ image.caption.clone() }</figcaption>
            </figure>
        }
    });

    html! {
        <div id="project-detail" class="project-detail">
            <button
                id="back-to-projects"
                class={classes!("btn", "btn-back", (*sticky_back).then_some("sticky-active"))}
                onclick={back}
            >{"← Back to Projects"}</button>

            <header class="detail-header" id="project-detail-header">
                <h2 id="detail-title" class="detail-title" tabindex="-1">{ record.title }</h2>
                <div class="project-meta">{ render::meta_line(record) }</div>
            </header>

            <nav class="detail-nav" aria-label="Project detail navigation">
                <ul>
                    { for jump_links }
                </ul>
            </nav>

            <div class="detail-main">
                <section id="overview" class="detail-section">
                    <h3 class="detail-subtitle">{"Project Overview"}</h3>
                    <p>{ record.overview }</p>
                </section>
                <section id="architecture" class="detail-section">
                    <h3 class="detail-subtitle">{"Architecture & Implementation"}</h3>
                    <ul class="detail-list">
                        { for record.architecture.iter().map(|item| html! { <li>{ *item }</li> }) }
                    </ul>
                </section>
                <section id="results" class="detail-section">
                    <h3 class="detail-subtitle">{"Results & Validation"}</h3>
                    <ul class="detail-list">
                        { for record.results.iter().map(|item| html! { <li>{ *item }</li> }) }
                    </ul>
                </section>
                <section id="skills-used" class="detail-section">
                    <h3 class="detail-subtitle">{"Skills & Technologies Used"}</h3>
                    <div class="skills-container">
                        { for record.skills.iter().map(|s| html! { <span class="skill-tag">{ *s }</span> }) }
                    </div>
                </section>
                <section id="images" class="detail-section">
                    <h3 class="detail-subtitle">{"Project Images"}</h3>
                    <div class="images-container">
                        { for gallery }
                    </div>
                </section>
            </div>

            <Lightbox state={lightbox.clone()} />
        </div>
    }
}

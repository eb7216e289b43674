use yew::prelude::*;

use crate::model::ProjectRecord;
use crate::render;
use crate::state::view::ProjectId;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub record: &'static ProjectRecord,
    /// (project id, DOM id of this card); the card id becomes the focus
    /// restore target when the detail view closes.
    pub on_open: Callback<(ProjectId, String)>,
    pub on_prefetch: Callback<ProjectId>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let record = props.record;
    let dom_id = render::card_dom_id(record.id);

    let open = {
        let cb = props.on_open.clone();
        let id = record.id;
        let dom_id = dom_id.clone();
        Callback::from(move |_: MouseEvent| cb.emit((id, dom_id.clone())))
    };
    let open_key = {
        let cb = props.on_open.clone();
        let id = record.id;
        let dom_id = dom_id.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                cb.emit((id, dom_id.clone()));
            }
        })
    };
    let prefetch = {
        let cb = props.on_prefetch.clone();
        let id = record.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    let prefetch_focus = {
        let cb = props.on_prefetch.clone();
        let id = record.id;
        Callback::from(move |_: FocusEvent| cb.emit(id))
    };

    let (skills, extra) = render::card_skills(record);

    html! {
        <article
            id={dom_id}
            class="project-card"
            tabindex="0"
            role="button"
            aria-label={format!("Open project details: {}", record.title)}
            onclick={open}
            onkeydown={open_key}
            onmouseenter={prefetch}
            onfocus={prefetch_focus}
        >
            <h3 class="card-title">{ record.title }</h3>
            <p class="card-blurb">{ render::card_blurb(record) }</p>
            <div class="skills-container">
                { for skills.iter().map(|s| html! { <span class="skill-tag">{ *s }</span> }) }
                if extra > 0 {
                    <span class="skill-tag skill-tag-more">{ format!("+{extra} more") }</span>
                }
            </div>
            <span class="card-cta" aria-hidden="true">{"View details →"}</span>
        </article>
    }
}

use yew::prelude::*;

use crate::model;
use crate::util;

fn header_id(index: usize) -> String {
    format!("accordion-header-{index}")
}

/// Exclusive-open skills accordion; opening a group closes the others.
#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    let open = use_state(|| None::<usize>);
    let groups = model::skill_groups();

    let items = groups.iter().enumerate().map(|(i, group)| {
        let is_open = *open == Some(i);
        let toggle = {
            let open = open.clone();
            Callback::from(move |_: MouseEvent| {
                open.set(if *open == Some(i) { None } else { Some(i) });
            })
        };
        // ArrowDown/ArrowUp move between headers and open the one landed on.
        let keynav = {
            let open = open.clone();
            let count = groups.len();
            Callback::from(move |e: KeyboardEvent| {
                let delta: isize = match e.key().as_str() {
                    "ArrowDown" => 1,
                    "ArrowUp" => -1,
                    _ => return,
                };
                e.prevent_default();
                let next = (i as isize + delta).rem_euclid(count as isize) as usize;
                util::focus_element(&header_id(next));
                open.set(Some(next));
            })
        };

        html! {
            <div class={classes!("accordion-item", is_open.then_some("active"))} key={group.title}>
                <button
                    id={header_id(i)}
                    class="accordion-header"
                    aria-expanded={if is_open { "true" } else { "false" }}
                    onclick={toggle}
                    onkeydown={keynav}
                >
                    <span>{ group.title }</span>
                    <span class="accordion-chevron" aria-hidden="true">{"▾"}</span>
                </button>
                <div class="accordion-content" aria-hidden={if is_open { "false" } else { "true" }}>
                    <ul>
                        { for group.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                    </ul>
                </div>
            </div>
        }
    });

    html! {
        <section id="skills" class="section">
            <div class="container">
                <h2 class="section-title">{"Skills"}</h2>
                <div class="accordion">
                    { for items }
                </div>
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::util;

#[function_component(Hero)]
pub fn hero() -> Html {
    let view_projects = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        util::jump_to_section("projects");
    });
    let get_in_touch = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        util::jump_to_section("contact");
    });

    html! {
        <section id="home" class="hero">
            <div class="container hero-inner">
                <p class="hero-kicker">{"Systems & Network Administration"}</p>
                <h1 class="hero-title">{"Majestor Kepseu"}</h1>
                <p class="hero-subtitle">
                    {"I design, deploy, and validate enterprise infrastructure: \
                      virtualization clusters, messaging platforms, and secure \
                      multi-site networks."}
                </p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary" onclick={view_projects}>
                        {"View Projects"}
                    </a>
                    <a href="#contact" class="btn btn-secondary" onclick={get_in_touch}>
                        {"Get in Touch"}
                    </a>
                </div>
            </div>
        </section>
    }
}

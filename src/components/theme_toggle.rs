use yew::prelude::*;

use crate::theme::{Theme, ThemePreference};

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub preference: ThemePreference,
    pub resolved: Theme,
    pub on_cycle: Callback<()>,
}

/// Floating three-way theme button: Auto -> Light -> Dark -> Auto.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let cycle_cb = {
        let cb = props.on_cycle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let label = props.preference.label(props.resolved);
    let next = match props.preference {
        ThemePreference::Auto => "Light",
        ThemePreference::Light => "Dark",
        ThemePreference::Dark => "Auto",
    };
    let aria = format!("Current theme: {label}. Click for {next}");
    let icon = match props.preference {
        ThemePreference::Auto => "◐",
        ThemePreference::Light => "☀",
        ThemePreference::Dark => "☾",
    };

    html! {
        <div class="theme-switcher">
            <button
                class={classes!("theme-toggle", format!("mode-{}", props.preference.as_str()))}
                aria-label={aria}
                onclick={cycle_cb}
            >
                <span class="theme-icon" aria-hidden="true">{ icon }</span>
                <span class="theme-tooltip">{ label }</span>
            </button>
        </div>
    }
}

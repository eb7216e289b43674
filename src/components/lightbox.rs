use yew::prelude::*;

use crate::render;
use crate::state::lightbox::{LightboxAction, LightboxState};
use crate::util;

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub state: UseReducerHandle<LightboxState>,
}

/// Modal image viewer for the detail gallery. Keyboard control (Escape,
/// ArrowLeft/ArrowRight) is handled by the detail view's document listener;
/// this component owns the pointer interactions and focus movement.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let state = props.state.clone();
    let was_open = use_mut_ref(|| false);

    // Focus follows the modal: the close button on open, the originating
    // gallery item back on close (it may be gone after a re-render, in which
    // case focus is simply left alone).
    {
        let open = state.open;
        let index = state.index;
        let was_open = was_open.clone();
        use_effect_with(open, move |open| {
            let before = std::mem::replace(&mut *was_open.borrow_mut(), *open);
            if *open {
                util::focus_element("lightbox-close");
            } else if before {
                util::focus_element(&render::gallery_item_id(index));
            }
            || ()
        });
    }

    if !state.open {
        return html! {};
    }
    let Some(image) = state.current().cloned() else {
        return html! {};
    };

    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Close))
    };
    let prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Prev))
    };
    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Next))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class="lightbox-modal active"
            role="dialog"
            aria-modal="true"
            aria-label="Image viewer"
            onclick={close.clone()}
        >
            <div class="lightbox-content" onclick={swallow}>
                <button
                    id="lightbox-close"
                    class="lightbox-close"
                    aria-label="Close image viewer"
                    title="Close (Esc)"
                    onclick={close}
                >{"×"}</button>
                if !state.single_image() {
                    <button
                        class="lightbox-nav lightbox-prev"
                        aria-label="Previous image"
                        title="Previous (←)"
                        onclick={prev}
                    >{"‹"}</button>
                }
                <img class="lightbox-img" src={image.src} alt={image.alt} />
                <div class="lightbox-caption">{ image.caption }</div>
                if !state.single_image() {
                    <button
                        class="lightbox-nav lightbox-next"
                        aria-label="Next image"
                        title="Next (→)"
                        onclick={next}
                    >{"›"}</button>
                }
            </div>
        </div>
    }
}

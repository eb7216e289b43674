use yew::platform::spawn_local;
use yew::prelude::*;

use crate::contact::{self, ContactFields, FieldErrors};
use crate::util;

#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Success,
    /// Dismissible error banner; submission failed or was blocked locally.
    Error(String),
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let fields = use_state(ContactFields::default);
    let errors = use_state(FieldErrors::default);
    let status = use_state(|| FormStatus::Idle);
    let honeypot = use_state(String::new);
    let last_submit = use_mut_ref(|| None::<f64>);

    let on_name = {
        let fields = fields.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                fields.set(ContactFields { name: input.value(), ..(*fields).clone() });
                errors.set(FieldErrors { name: None, ..(*errors).clone() });
                if matches!(*status, FormStatus::Error(_)) {
                    status.set(FormStatus::Idle);
                }
            }
        })
    };
    let on_email = {
        let fields = fields.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                fields.set(ContactFields { email: input.value(), ..(*fields).clone() });
                errors.set(FieldErrors { email: None, ..(*errors).clone() });
                if matches!(*status, FormStatus::Error(_)) {
                    status.set(FormStatus::Idle);
                }
            }
        })
    };
    let on_message = {
        let fields = fields.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                fields.set(ContactFields { message: input.value(), ..(*fields).clone() });
                errors.set(FieldErrors { message: None, ..(*errors).clone() });
                if matches!(*status, FormStatus::Error(_)) {
                    status.set(FormStatus::Idle);
                }
            }
        })
    };
    let on_honeypot = {
        let honeypot = honeypot.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                honeypot.set(input.value());
            }
        })
    };

    // Validate a single field once the user leaves it.
    let blur_name = {
        let fields = fields.clone();
        let errors = errors.clone();
        Callback::from(move |_: FocusEvent| {
            errors.set(FieldErrors { name: contact::validate_name(&fields.name), ..(*errors).clone() });
        })
    };
    let blur_email = {
        let fields = fields.clone();
        let errors = errors.clone();
        Callback::from(move |_: FocusEvent| {
            errors.set(FieldErrors { email: contact::validate_email(&fields.email), ..(*errors).clone() });
        })
    };
    let blur_message = {
        let fields = fields.clone();
        let errors = errors.clone();
        Callback::from(move |_: FocusEvent| {
            errors.set(FieldErrors { message: contact::validate_message(&fields.message), ..(*errors).clone() });
        })
    };

    let dismiss_status = {
        let status = status.clone();
        Callback::from(move |_: MouseEvent| status.set(FormStatus::Idle))
    };

    let on_submit = {
        let fields = fields.clone();
        let errors = errors.clone();
        let status = status.clone();
        let honeypot = honeypot.clone();
        let last_submit = last_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if matches!(*status, FormStatus::Sending) {
                return;
            }

            // Local gate first: a blocked submission never reaches the network.
            let now = util::now_ms();
            if let Err(block) = contact::submission_gate(honeypot.as_str(), *last_submit.borrow(), now) {
                util::clog(&format!("contact submission blocked: {block:?}"));
                status.set(FormStatus::Error(block.message().to_string()));
                return;
            }

            let validation = contact::validate(&fields);
            if let Some(first) = validation.first_invalid() {
                util::focus_element(first.dom_id());
                errors.set(validation);
                return;
            }
            errors.set(FieldErrors::default());
            *last_submit.borrow_mut() = Some(now);
            status.set(FormStatus::Sending);

            let payload = (*fields).clone();
            let fields = fields.clone();
            let status = status.clone();
            spawn_local(async move {
                match contact::send_message(&payload, now).await {
                    Ok(()) => {
                        status.set(FormStatus::Success);
                        fields.set(ContactFields::default());
                        // Ready for the next message.
                        util::focus_element("name");
                    }
                    Err(err) => {
                        util::cwarn(&format!("contact submission failed: {}", err.message()));
                        status.set(FormStatus::Error(err.message()));
                    }
                }
            });
        })
    };

    let sending = matches!(*status, FormStatus::Sending);

    let field_error = |error: Option<&'static str>| -> Html {
        match error {
            Some(msg) => html! { <div class="field-error" role="alert">{ msg }</div> },
            None => html! {},
        }
    };

    html! {
        <section id="contact" class="section">
            <div class="container">
                <h2 class="section-title">{"Contact"}</h2>
                <form id="contact-form" class="contact-form" novalidate=true onsubmit={on_submit}>
                    <div class={classes!("form-field", errors.name.map(|_| "has-error"))}>
                        <label for="name">{"Name"}</label>
                        <input
                            id="name"
                            name="name"
                            type="text"
                            autocomplete="name"
                            value={fields.name.clone()}
                            oninput={on_name}
                            onblur={blur_name}
                        />
                        { field_error(errors.name) }
                    </div>
                    <div class={classes!("form-field", errors.email.map(|_| "has-error"))}>
                        <label for="email">{"Email"}</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            value={fields.email.clone()}
                            oninput={on_email}
                            onblur={blur_email}
                        />
                        { field_error(errors.email) }
                    </div>
                    <div class={classes!("form-field", errors.message.map(|_| "has-error"))}>
                        <label for="message">{"Message"}</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="6"
                            value={fields.message.clone()}
                            oninput={on_message}
                            onblur={blur_message}
                        />
                        { field_error(errors.message) }
                    </div>
                    // Honeypot: hidden from real users, tempting to bots.
                    <input
                        class="hp-field"
                        type="text"
                        name="_gotcha"
                        tabindex="-1"
                        aria-hidden="true"
                        autocomplete="off"
                        value={(*honeypot).clone()}
                        oninput={on_honeypot}
                    />
                    <button class="btn btn-primary" type="submit" disabled={sending}>
                        { if sending { "Sending…" } else { "Send Message" } }
                    </button>
                </form>
                <div id="form-status" class="form-status" role="status" aria-live="polite">
                    {
                        match &*status {
                            FormStatus::Idle | FormStatus::Sending => html! {},
                            FormStatus::Success => html! {
                                <div class="status-success">
                                    <strong>{"Thank you!"}</strong>
                                    {" Your message has been sent. I'll get back to you within 24–48 hours."}
                                </div>
                            },
                            FormStatus::Error(msg) => html! {
                                <div class="status-error">
                                    <span>{ msg.clone() }</span>
                                    <button
                                        class="status-dismiss"
                                        aria-label="Dismiss message"
                                        onclick={dismiss_status.clone()}
                                    >{"×"}</button>
                                </div>
                            },
                        }
                    }
                </div>
            </div>
        </section>
    }
}

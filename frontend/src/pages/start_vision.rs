use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::lead_form::{
    apply_outcome, Field, LeadForm, SubmitStatus, FINISHES, KITCHEN_VIBES, MAX_FINISHES,
    PARTITIONS, SHUTTERS, WARDROBES,
};
use crate::utils::api::submit_lead;

const SUCCESS_MESSAGE: &str = "Thank you! We'll reach out to craft your mix.";
const INCOMPLETE_MESSAGE: &str = "Please add your name and a phone number or email.";

fn update(form: &UseStateHandle<LeadForm>, field: Field, value: String) {
    let mut next = (**form).clone();
    next.set(field, value);
    form.set(next);
}

fn text_input(
    form: &UseStateHandle<LeadForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    required: bool,
) -> Html {
    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(&form, field, input.value());
        })
    };
    html! {
        <label class="vision-field">
            <span>{label}{ if required { " *" } else { "" } }</span>
            <input
                type="text"
                value={form.get(field).to_string()}
                placeholder={placeholder}
                required={required}
                oninput={oninput}
            />
        </label>
    }
}

/// Single-choice question rendered as pills; clicking the chosen pill clears it.
fn choice_group(
    form: &UseStateHandle<LeadForm>,
    field: Field,
    question: &'static str,
    options: &'static [&'static str],
) -> Html {
    html! {
        <fieldset class="vision-question">
            <legend>{question}</legend>
            <div class="vision-options">
                { for options.iter().map(|option| {
                    let selected = form.get(field) == *option;
                    let onclick = {
                        let form = form.clone();
                        let value = if selected { String::new() } else { option.to_string() };
                        Callback::from(move |_: MouseEvent| update(&form, field, value.clone()))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("vision-pill", selected.then_some("selected"))}
                            aria-pressed={selected.to_string()}
                            onclick={onclick}
                        >
                            {*option}
                        </button>
                    }
                }) }
            </div>
        </fieldset>
    }
}

fn finish_group(form: &UseStateHandle<LeadForm>) -> Html {
    html! {
        <fieldset class="vision-question">
            <legend>{format!("Pick up to {} finishes", MAX_FINISHES)}</legend>
            <div class="vision-options">
                { for FINISHES.iter().map(|option| {
                    let option: &'static str = *option;
                    let selected = form.has_finish(option);
                    let disabled = form.finish_disabled(option);
                    let onclick = {
                        let form = form.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*form).clone();
                            next.toggle_finish(option);
                            form.set(next);
                        })
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("vision-pill", selected.then_some("selected"))}
                            aria-pressed={selected.to_string()}
                            disabled={disabled}
                            onclick={onclick}
                        >
                            {option}
                        </button>
                    }
                }) }
            </div>
        </fieldset>
    }
}

#[function_component(StartVision)]
pub fn start_vision() -> Html {
    let form = use_state(LeadForm::default);
    let status = use_state(|| SubmitStatus::Idle);

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_sending() {
                return;
            }
            if !form.can_submit() {
                status.set(SubmitStatus::Failed(INCOMPLETE_MESSAGE.to_string()));
                return;
            }
            status.set(SubmitStatus::Sending);
            let form = form.clone();
            let status = status.clone();
            let mut draft = (*form).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = submit_lead(&draft).await;
                if let Err(message) = &outcome {
                    log::warn!("Vision request failed: {}", message);
                }
                let next = apply_outcome(&mut draft, outcome);
                if next == SubmitStatus::Sent {
                    form.set(draft);
                }
                status.set(next);
            });
        })
    };

    let on_website = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(&form, Field::Website, input.value());
        })
    };

    let sending = status.is_sending();

    html! {
        <div class="vision-page">
            <style>{VISION_CSS}</style>
            <header class="vision-header">
                <h1>{"Start your vision"}</h1>
                <p>{"Tell us a little about your space. We will call back to shape it with you."}</p>
            </header>
            <form class="vision-form" onsubmit={onsubmit} novalidate={true}>
                {
                    match &*status {
                        SubmitStatus::Sent => html! {
                            <div class="vision-banner success" role="status">{SUCCESS_MESSAGE}</div>
                        },
                        SubmitStatus::Failed(message) => html! {
                            <div class="vision-banner error" role="alert">{message.clone()}</div>
                        },
                        _ => html! {},
                    }
                }
                <div class="vision-row">
                    { text_input(&form, Field::Name, "Name", "Your full name", true) }
                    { text_input(&form, Field::Contact, "Phone or email", "How should we reach you?", true) }
                    { text_input(&form, Field::City, "City", "Where is the project?", false) }
                </div>
                { choice_group(&form, Field::KitchenVibe, "What is your kitchen vibe?", &KITCHEN_VIBES) }
                { finish_group(&form) }
                { choice_group(&form, Field::Wardrobe, "How do you like your wardrobe?", &WARDROBES) }
                { choice_group(&form, Field::Shutters, "What should your shutters do?", &SHUTTERS) }
                { choice_group(&form, Field::Partitions, "Which partition suits your space?", &PARTITIONS) }
                <div class="vision-honeypot" aria-hidden="true">
                    <label>
                        {"Website"}
                        <input
                            type="text"
                            name="website"
                            tabindex="-1"
                            autocomplete="off"
                            value={form.website.clone()}
                            oninput={on_website}
                        />
                    </label>
                </div>
                <button type="submit" class="vision-submit" disabled={sending}>
                    { if sending { "Sending…" } else { "Send & book a callback" } }
                </button>
            </form>
        </div>
    }
}

const VISION_CSS: &str = r#"
    .vision-page {
        max-width: 900px;
        margin: 0 auto;
        padding: 8rem 2rem 5rem;
        color: #d8d2c4;
    }
    .vision-header h1 {
        font-family: 'Cormorant Garamond', serif;
        font-weight: 300;
        font-size: clamp(2.2rem, 5vw, 3.5rem);
        color: #f5f0e6;
        margin: 0;
    }
    .vision-form {
        display: flex;
        flex-direction: column;
        gap: 2rem;
        margin-top: 3rem;
    }
    .vision-row {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.25rem;
    }
    .vision-field {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        font-size: 0.85rem;
        letter-spacing: 0.08em;
    }
    .vision-field input {
        padding: 0.85rem 1rem;
        background: transparent;
        border: 1px solid rgba(201, 169, 110, 0.4);
        color: #f5f0e6;
        font-size: 1rem;
    }
    .vision-question {
        border: none;
        padding: 0;
        margin: 0;
    }
    .vision-question legend {
        color: #f5f0e6;
        font-size: 1.1rem;
        margin-bottom: 0.9rem;
    }
    .vision-options {
        display: flex;
        flex-wrap: wrap;
        gap: 0.6rem;
    }
    .vision-pill {
        padding: 0.6rem 1.2rem;
        border: 1px solid rgba(201, 169, 110, 0.4);
        border-radius: 999px;
        background: transparent;
        color: #d8d2c4;
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .vision-pill.selected {
        background: #c9a96e;
        border-color: #c9a96e;
        color: #0b0b0b;
    }
    .vision-pill:disabled {
        opacity: 0.35;
        cursor: not-allowed;
    }
    .vision-honeypot {
        position: absolute;
        left: -10000px;
        width: 1px;
        height: 1px;
        overflow: hidden;
    }
    .vision-submit {
        align-self: flex-start;
        padding: 1rem 2.6rem;
        background: #c9a96e;
        border: none;
        color: #0b0b0b;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        font-size: 0.8rem;
        cursor: pointer;
    }
    .vision-submit:disabled {
        opacity: 0.6;
        cursor: wait;
    }
    .vision-banner {
        padding: 1rem 1.25rem;
        border-left: 3px solid;
    }
    .vision-banner.success {
        border-color: #7fb77e;
        background: rgba(127, 183, 126, 0.12);
        color: #cfe8ce;
    }
    .vision-banner.error {
        border-color: #d0706b;
        background: rgba(208, 112, 107, 0.12);
        color: #f1cdcb;
    }
"#;

use yew::prelude::*;

use crate::data::galleries::JOURNEY;

/// Numbered steps from first call to aftercare. Clicking a step expands it.
#[function_component(Journey)]
pub fn journey() -> Html {
    let expanded = use_state(|| None::<usize>);

    html! {
        <section class="journey">
            <style>{JOURNEY_CSS}</style>
            <h2>{"Your Journey With Us"}</h2>
            <ol class="journey-steps">
                { for JOURNEY.iter().enumerate().map(|(i, step)| {
                    let open = *expanded == Some(i);
                    let onclick = {
                        let expanded = expanded.clone();
                        Callback::from(move |_: MouseEvent| {
                            expanded.set(if open { None } else { Some(i) })
                        })
                    };
                    html! {
                        <li class={classes!("journey-step", open.then_some("open"))}>
                            <button type="button" aria-expanded={open.to_string()} onclick={onclick}>
                                <span class="journey-number">{format!("{:02}", i + 1)}</span>
                                <span class="journey-title">{step.title}</span>
                            </button>
                            if open {
                                <p>{step.description}</p>
                            }
                        </li>
                    }
                }) }
            </ol>
        </section>
    }
}

const JOURNEY_CSS: &str = r#"
    .journey {
        padding: 6rem 2rem;
        max-width: 900px;
        margin: 0 auto;
        color: #d8d2c4;
    }
    .journey h2 {
        font-family: 'Cormorant Garamond', serif;
        font-weight: 300;
        font-size: 2.4rem;
        color: #f5f0e6;
        text-align: center;
    }
    .journey-steps {
        list-style: none;
        padding: 0;
        border-left: 1px solid rgba(201, 169, 110, 0.4);
    }
    .journey-step button {
        display: flex;
        gap: 1.25rem;
        align-items: baseline;
        width: 100%;
        padding: 1.1rem 1.5rem;
        background: none;
        border: none;
        color: inherit;
        text-align: left;
        cursor: pointer;
    }
    .journey-number {
        color: #c9a96e;
        letter-spacing: 0.2em;
    }
    .journey-title {
        font-size: 1.2rem;
        color: #f5f0e6;
    }
    .journey-step p {
        margin: 0 0 1rem 4.2rem;
        line-height: 1.7;
    }
"#;

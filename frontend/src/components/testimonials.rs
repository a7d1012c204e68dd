use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::carousel::{CarouselAction, CarouselState, AUTO_ADVANCE_MS};
use crate::data::galleries::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let state = use_reducer(|| CarouselState::new(TESTIMONIALS.len()));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval =
                    Interval::new(AUTO_ADVANCE_MS, move || dispatcher.dispatch(CarouselAction::Tick));
                move || drop(interval)
            },
            (),
        );
    }

    let current = &TESTIMONIALS[state.current()];
    let on_enter = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Pause))
    };
    let on_leave = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Resume))
    };

    html! {
        <section class="testimonials" onmouseenter={on_enter} onmouseleave={on_leave}>
            <style>{TESTIMONIALS_CSS}</style>
            <h2>{"Client Stories"}</h2>
            <blockquote key={current.name}>
                <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", current.quote)}</p>
                <footer>
                    <span class="testimonial-name">{current.name}</span>
                    <span class="testimonial-title">{current.title}</span>
                    <span class="testimonial-project">{current.project}</span>
                </footer>
            </blockquote>
            <div class="testimonial-dots">
                { for (0..TESTIMONIALS.len()).map(|i| {
                    let state = state.clone();
                    html! {
                        <button
                            class={classes!("testimonial-dot", (i == state.current()).then_some("active"))}
                            aria-label={format!("Show testimonial {}", i + 1)}
                            onclick={Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::GoTo(i)))}
                        />
                    }
                }) }
            </div>
        </section>
    }
}

const TESTIMONIALS_CSS: &str = r#"
    .testimonials {
        padding: 6rem 2rem;
        text-align: center;
        background: #111;
        color: #f5f0e6;
    }
    .testimonials h2 {
        font-family: 'Cormorant Garamond', serif;
        font-weight: 300;
        font-size: 2.4rem;
    }
    .testimonials blockquote {
        max-width: 760px;
        margin: 2rem auto;
        animation: testimonial-fade 0.6s ease;
    }
    .testimonial-quote {
        font-size: 1.3rem;
        line-height: 1.8;
        font-style: italic;
    }
    .testimonials footer span {
        display: block;
        margin-top: 0.3rem;
    }
    .testimonial-name {
        color: #c9a96e;
        letter-spacing: 0.1em;
    }
    .testimonial-title,
    .testimonial-project {
        color: #a8a294;
        font-size: 0.9rem;
    }
    .testimonial-dots {
        display: flex;
        justify-content: center;
        gap: 0.6rem;
    }
    .testimonial-dot {
        width: 10px;
        height: 10px;
        padding: 0;
        border: 1px solid #c9a96e;
        border-radius: 50%;
        background: transparent;
        cursor: pointer;
    }
    .testimonial-dot.active {
        background: #c9a96e;
    }
    @keyframes testimonial-fade {
        from { opacity: 0; transform: translateY(8px); }
        to { opacity: 1; transform: none; }
    }
"#;

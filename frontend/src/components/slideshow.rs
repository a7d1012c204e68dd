use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::carousel::{
    key_action, swipe_direction, CarouselAction, CarouselState, Direction, AUTO_ADVANCE_MS,
    TOUCH_PAUSE_MS,
};
use crate::data::galleries::GalleryItem;

#[derive(Properties, PartialEq)]
pub struct SlideshowProps {
    pub items: &'static [GalleryItem],
    #[prop_or_default]
    pub class: Classes,
}

fn first_touch_x(e: &TouchEvent) -> Option<i32> {
    e.changed_touches().get(0).map(|t| t.client_x())
}

/// Auto-playing image slideshow with arrows, dots, keyboard and swipe.
#[function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> Html {
    let items = props.items;
    let state = use_reducer(|| CarouselState::new(items.len()));
    let touch_start = use_mut_ref(|| None::<i32>);
    let resume_timer = use_mut_ref(|| None::<Timeout>);

    // one independent timer per slideshow
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |len| {
                let interval = (*len > 1).then(|| {
                    Interval::new(AUTO_ADVANCE_MS, move || dispatcher.dispatch(CarouselAction::Tick))
                });
                move || drop(interval)
            },
            items.len(),
        );
    }

    if state.is_empty() {
        return html! {};
    }

    let on_prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };
    let on_enter = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Pause))
    };
    let on_leave = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Resume))
    };
    let on_keydown = {
        let state = state.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(action) = key_action(&e.key(), false) {
                e.prevent_default();
                state.dispatch(action);
            }
        })
    };
    let on_touch_start = {
        let state = state.clone();
        let touch_start = touch_start.clone();
        let resume_timer = resume_timer.clone();
        Callback::from(move |e: TouchEvent| {
            *touch_start.borrow_mut() = first_touch_x(&e);
            resume_timer.borrow_mut().take();
            state.dispatch(CarouselAction::Pause);
        })
    };
    let on_touch_end = {
        let state = state.clone();
        let touch_start = touch_start.clone();
        let resume_timer = resume_timer.clone();
        Callback::from(move |e: TouchEvent| {
            let start = touch_start.borrow_mut().take();
            if let (Some(start), Some(end)) = (start, first_touch_x(&e)) {
                match swipe_direction(start, end) {
                    Some(Direction::Forward) => state.dispatch(CarouselAction::Next),
                    Some(Direction::Backward) => state.dispatch(CarouselAction::Prev),
                    None => {}
                }
            }
            let dispatcher = state.dispatcher();
            *resume_timer.borrow_mut() = Some(Timeout::new(TOUCH_PAUSE_MS, move || {
                dispatcher.dispatch(CarouselAction::Resume)
            }));
        })
    };

    let current = state.current();
    let caption = items[current].caption;

    html! {
        <div
            class={classes!("slideshow", props.class.clone())}
            tabindex="0"
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            onkeydown={on_keydown}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
        >
            <style>{SLIDESHOW_CSS}</style>
            { for items.iter().enumerate().map(|(i, item)| html! {
                <img
                    class={classes!("slide", (i == current).then_some("active"))}
                    src={item.image}
                    alt={item.caption}
                    loading={if i == 0 { "eager" } else { "lazy" }}
                />
            }) }
            <div class={classes!("slide-caption", state.is_paused().then_some("visible"))}>{caption}</div>
            if state.len() > 1 {
                <button class="slide-arrow prev" aria-label="Previous slide" onclick={on_prev}>{"‹"}</button>
                <button class="slide-arrow next" aria-label="Next slide" onclick={on_next}>{"›"}</button>
                <div class="slide-dots">
                    { for (0..items.len()).map(|i| {
                        let state = state.clone();
                        html! {
                            <button
                                class={classes!("slide-dot", (i == current).then_some("active"))}
                                aria-label={format!("Go to slide {}", i + 1)}
                                onclick={Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::GoTo(i)))}
                            />
                        }
                    }) }
                </div>
            }
        </div>
    }
}

const SLIDESHOW_CSS: &str = r#"
    .slideshow {
        position: relative;
        width: 100%;
        height: 100%;
        min-height: 60vh;
        overflow: hidden;
        background: #0b0b0b;
        outline: none;
    }
    .slide {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0;
        transition: opacity 0.9s ease;
    }
    .slide.active {
        opacity: 1;
    }
    .slide-caption {
        position: absolute;
        left: 2rem;
        bottom: 3.5rem;
        padding: 0.5rem 1rem;
        background: rgba(11, 11, 11, 0.6);
        color: #f5f0e6;
        font-size: 0.95rem;
        letter-spacing: 0.04em;
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .slideshow:hover .slide-caption,
    .slide-caption.visible {
        opacity: 1;
    }
    .slide-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        width: 48px;
        height: 48px;
        border: 1px solid rgba(245, 240, 230, 0.4);
        border-radius: 50%;
        background: rgba(11, 11, 11, 0.45);
        color: #f5f0e6;
        font-size: 1.6rem;
        cursor: pointer;
    }
    .slide-arrow.prev {
        left: 1.5rem;
    }
    .slide-arrow.next {
        right: 1.5rem;
    }
    .slide-dots {
        position: absolute;
        bottom: 1.25rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        gap: 0.5rem;
    }
    .slide-dot {
        width: 8px;
        height: 8px;
        padding: 0;
        border: none;
        border-radius: 50%;
        background: rgba(245, 240, 230, 0.4);
        cursor: pointer;
    }
    .slide-dot.active {
        background: #c9a96e;
    }
"#;

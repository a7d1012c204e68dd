use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::carousel::{key_action, CarouselAction, CarouselState};
use crate::data::galleries::GalleryItem;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub items: &'static [GalleryItem],
}

fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            log::warn!("Could not update body overflow");
        }
    }
}

/// Thumbnail grid that opens a full-screen viewer on click.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let items = props.items;
    let state = use_reducer(|| CarouselState::new(items.len()));
    let overlay_open = state.is_overlay_open();

    // Page scroll is frozen and arrow/escape keys are captured only while open
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |open| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if *open => {
                        set_body_scroll_locked(true);
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if let Some(action) = key_action(&e.key(), true) {
                                e.prevent_default();
                                dispatcher.dispatch(action);
                            }
                        });
                        if window
                            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            log::warn!("Could not attach lightbox key handler");
                        }
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                            set_body_scroll_locked(false);
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            overlay_open,
        );
    }

    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::CloseOverlay))
    };
    let prev = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.dispatch(CarouselAction::Prev);
        })
    };
    let next = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.dispatch(CarouselAction::Next);
        })
    };

    html! {
        <div class="lightbox">
            <style>{LIGHTBOX_CSS}</style>
            <div class="lightbox-grid">
                { for items.iter().enumerate().map(|(i, item)| {
                    let state = state.clone();
                    html! {
                        <button
                            class="lightbox-thumb"
                            onclick={Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::OpenOverlay(i)))}
                        >
                            <img src={item.image} alt={item.caption} loading="lazy" />
                            <span>{item.caption}</span>
                        </button>
                    }
                }) }
            </div>
            if overlay_open {
                <div class="lightbox-overlay" role="dialog" aria-modal="true" onclick={close.clone()}>
                    <button class="lightbox-close" aria-label="Close" onclick={close}>{"×"}</button>
                    <button class="lightbox-arrow prev" aria-label="Previous image" onclick={prev}>{"‹"}</button>
                    <figure onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <img src={items[state.current()].image} alt={items[state.current()].caption} />
                        <figcaption>
                            {items[state.current()].caption}
                            <span class="lightbox-count">{format!("{} / {}", state.current() + 1, state.len())}</span>
                        </figcaption>
                    </figure>
                    <button class="lightbox-arrow next" aria-label="Next image" onclick={next}>{"›"}</button>
                </div>
            }
        </div>
    }
}

const LIGHTBOX_CSS: &str = r#"
    .lightbox-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
        gap: 1.25rem;
        max-width: 1200px;
        margin: 0 auto;
        padding: 2rem;
    }
    .lightbox-thumb {
        position: relative;
        padding: 0;
        border: none;
        background: none;
        cursor: zoom-in;
        overflow: hidden;
        aspect-ratio: 4 / 3;
    }
    .lightbox-thumb img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.6s ease;
    }
    .lightbox-thumb:hover img {
        transform: scale(1.05);
    }
    .lightbox-thumb span {
        position: absolute;
        left: 1rem;
        bottom: 1rem;
        color: #f5f0e6;
        letter-spacing: 0.08em;
        text-shadow: 0 1px 6px rgba(0, 0, 0, 0.7);
    }
    .lightbox-overlay {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(5, 5, 5, 0.94);
    }
    .lightbox-overlay figure {
        margin: 0;
        max-width: 85vw;
        max-height: 85vh;
        text-align: center;
    }
    .lightbox-overlay img {
        max-width: 85vw;
        max-height: 78vh;
        object-fit: contain;
    }
    .lightbox-overlay figcaption {
        color: #d8d2c4;
        margin-top: 1rem;
    }
    .lightbox-count {
        margin-left: 1rem;
        color: #c9a96e;
    }
    .lightbox-close,
    .lightbox-arrow {
        position: absolute;
        background: none;
        border: none;
        color: #f5f0e6;
        font-size: 2.4rem;
        cursor: pointer;
    }
    .lightbox-close {
        top: 1.5rem;
        right: 2rem;
    }
    .lightbox-arrow.prev {
        left: 2rem;
    }
    .lightbox-arrow.next {
        right: 2rem;
    }
"#;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const LINKS: [(&str, Route); 10] = [
    ("Home", Route::Home),
    ("Products", Route::Products),
    ("Kitchens", Route::Kitchens),
    ("Wardrobes", Route::Wardrobes),
    ("Shutters", Route::Shutters),
    ("Partitions", Route::Partitions),
    ("Experience", Route::Experience),
    ("Start your vision", Route::StartVision),
    ("About", Route::About),
    ("Contact", Route::Contact),
];

/// Scroll depth after which the bar gets its blurred backdrop.
const SCROLLED_AFTER_PX: f64 = 100.0;

fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

#[function_component(TopRightMenu)]
pub fn top_right_menu() -> Html {
    let open = use_state(|| false);
    let scrolled = use_state_eq(|| false);
    let route = use_route::<Route>();

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                                scrolled.set(is_scrolled(y));
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not attach menu scroll handler");
                    }
                    if let Ok(y) = window.scroll_y() {
                        scrolled.set(is_scrolled(y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // close the panel whenever navigation happens
    {
        let open = open.clone();
        use_effect_with_deps(
            move |_| {
                open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <>
            <style>{MENU_CSS}</style>
            <nav class={classes!("top-menu", (*scrolled).then_some("scrolled"))}>
                <Link<Route> to={Route::Home} classes="top-menu-brand">{"LUSSO"}</Link<Route>>
                <button
                    class={classes!("top-menu-toggle", (*open).then_some("open"))}
                    aria-label="Toggle menu"
                    aria-expanded={(*open).to_string()}
                    onclick={toggle}
                >
                    <span></span>
                    <span></span>
                </button>
                if *open {
                    <div class="top-menu-panel">
                        { for LINKS.iter().map(|(label, target)| {
                            let active = route.as_ref() == Some(target);
                            html! {
                                <Link<Route>
                                    to={target.clone()}
                                    classes={classes!("top-menu-link", active.then_some("active"))}
                                >
                                    {*label}
                                </Link<Route>>
                            }
                        }) }
                    </div>
                }
            </nav>
        </>
    }
}

const MENU_CSS: &str = r#"
    .top-menu {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.25rem 2rem;
        z-index: 50;
        pointer-events: none;
    }
    .top-menu.scrolled {
        background: rgba(11, 11, 11, 0.35);
        backdrop-filter: blur(12px);
        transition: background 0.3s ease;
    }
    .top-menu > * {
        pointer-events: auto;
    }
    .top-menu-brand {
        font-family: 'Cormorant Garamond', serif;
        letter-spacing: 0.35em;
        font-size: 1.4rem;
        color: #f5f0e6;
        text-decoration: none;
    }
    .top-menu-toggle {
        width: 44px;
        height: 44px;
        border: 1px solid rgba(245, 240, 230, 0.4);
        border-radius: 50%;
        background: rgba(15, 15, 15, 0.55);
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        gap: 6px;
        cursor: pointer;
    }
    .top-menu-toggle span {
        width: 18px;
        height: 1px;
        background: #f5f0e6;
        transition: transform 0.3s ease;
    }
    .top-menu-toggle.open span:first-child {
        transform: translateY(3.5px) rotate(45deg);
    }
    .top-menu-toggle.open span:last-child {
        transform: translateY(-3.5px) rotate(-45deg);
    }
    .top-menu-panel {
        position: absolute;
        top: 5rem;
        right: 2rem;
        display: flex;
        flex-direction: column;
        min-width: 220px;
        padding: 1rem 0;
        background: rgba(15, 15, 15, 0.92);
        border: 1px solid rgba(201, 169, 110, 0.3);
        backdrop-filter: blur(12px);
    }
    .top-menu-link {
        padding: 0.6rem 1.5rem;
        color: #d8d2c4;
        text-decoration: none;
        font-size: 0.95rem;
        letter-spacing: 0.05em;
    }
    .top-menu-link:hover,
    .top-menu-link.active {
        color: #c9a96e;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_appears_only_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }
}

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::data::galleries::GallerySection;

#[derive(Properties, PartialEq)]
pub struct TypesNavProps {
    pub sections: &'static [GallerySection],
}

fn scroll_to_section(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            options.block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No section with id {}", id),
    }
}

/// Row of jump links to the slideshow sections further down the page.
#[function_component(TypesNav)]
pub fn types_nav(props: &TypesNavProps) -> Html {
    html! {
        <nav class="types-nav">
            <style>{TYPES_NAV_CSS}</style>
            { for props.sections.iter().map(|section| {
                let id = section.id;
                html! {
                    <button
                        class="types-nav-link"
                        onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id))}
                    >
                        {section.title}
                    </button>
                }
            }) }
        </nav>
    }
}

const TYPES_NAV_CSS: &str = r#"
    .types-nav {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
        padding: 2rem;
        background: #0b0b0b;
    }
    .types-nav-link {
        background: transparent;
        border: 1px solid rgba(201, 169, 110, 0.5);
        color: #d8d2c4;
        padding: 0.7rem 1.8rem;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        font-size: 0.75rem;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .types-nav-link:hover {
        background: #c9a96e;
        color: #0b0b0b;
    }
"#;

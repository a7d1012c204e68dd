use yew::prelude::*;

use crate::components::slideshow::Slideshow;
use crate::data::galleries::GallerySection;

#[derive(Properties, PartialEq)]
pub struct FramedSlideshowProps {
    pub section: GallerySection,
    /// Position of the section on its page, shown as "01", "02", ...
    pub index: usize,
}

#[function_component(FramedSlideshow)]
pub fn framed_slideshow(props: &FramedSlideshowProps) -> Html {
    let section = props.section;
    html! {
        <section id={section.id} class="framed-section">
            <style>{FRAMED_CSS}</style>
            <div class="framed-heading">
                <span class="framed-index">{format!("{:02}", props.index + 1)}</span>
                <h2>{section.title}</h2>
            </div>
            <div class="framed-frame">
                <Slideshow items={section.items} />
            </div>
        </section>
    }
}

const FRAMED_CSS: &str = r#"
    .framed-section {
        min-height: 100vh;
        padding: 6rem 2rem 3rem;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        scroll-margin-top: 1rem;
    }
    .framed-heading {
        display: flex;
        align-items: baseline;
        gap: 1rem;
        color: #f5f0e6;
    }
    .framed-heading h2 {
        font-family: 'Cormorant Garamond', serif;
        font-weight: 300;
        font-size: 2.4rem;
        margin: 0;
    }
    .framed-index {
        color: #c9a96e;
        letter-spacing: 0.2em;
    }
    .framed-frame {
        flex: 1;
        display: flex;
        border: 1px solid rgba(201, 169, 110, 0.35);
        padding: 0.75rem;
    }
"#;

/// Renders every section of a product page in order.
pub fn framed_sections(sections: &'static [GallerySection]) -> Html {
    html! {
        { for sections.iter().enumerate().map(|(index, section)| html! {
            <FramedSlideshow key={section.id} section={*section} {index} />
        }) }
    }
}

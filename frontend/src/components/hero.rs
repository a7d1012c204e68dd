use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub image: AttrValue,
    /// Optional call to action rendered under the subtitle.
    #[prop_or_default]
    pub cta: Option<(AttrValue, Route)>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let background = format!(
        "background-image: linear-gradient(rgba(0,0,0,0.35), rgba(0,0,0,0.65)), url('{}');",
        props.image
    );
    html! {
        <header class="hero" style={background}>
            <style>{HERO_CSS}</style>
            <div class="hero-content">
                <h1>{ props.title.clone() }</h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="hero-subtitle">{ subtitle.clone() }</p>
                }
                if let Some((label, route)) = &props.cta {
                    <Link<Route> to={route.clone()} classes="hero-cta">{ label.clone() }</Link<Route>>
                }
            </div>
        </header>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        min-height: 90vh;
        display: flex;
        align-items: center;
        justify-content: center;
        background-size: cover;
        background-position: center;
        text-align: center;
        color: #f5f0e6;
        padding: 6rem 2rem 4rem;
    }
    .hero-content {
        max-width: 760px;
    }
    .hero h1 {
        font-family: 'Cormorant Garamond', serif;
        font-weight: 300;
        font-size: clamp(2.5rem, 6vw, 4.5rem);
        letter-spacing: 0.04em;
        margin: 0;
    }
    .hero-subtitle {
        font-size: 1.15rem;
        color: #d8d2c4;
        margin: 1.5rem 0 2.5rem;
        line-height: 1.7;
    }
    .hero-cta {
        display: inline-block;
        padding: 0.9rem 2.4rem;
        border: 1px solid #c9a96e;
        color: #c9a96e;
        text-decoration: none;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        font-size: 0.8rem;
        transition: all 0.3s ease;
    }
    .hero-cta:hover {
        background: #c9a96e;
        color: #0b0b0b;
    }
"#;

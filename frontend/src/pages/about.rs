use yew::prelude::*;

use crate::components::hero::Hero;
use crate::Route;

const VALUES: [(&str, &str); 4] = [
    ("Craft", "Every panel is cut, edged and finished in our own workshop."),
    ("Material", "Stone, veneer and metal sourced for how they age, not just how they look."),
    ("Listening", "Designs start with your routines: how you cook, dress and host."),
    ("Care", "Installation teams stay until the last hinge is aligned."),
];

const STEPS: [(&str, &str); 4] = [
    ("Consult", "Share your vision and we call back to talk it through."),
    ("Design", "Layouts, finishes and lighting drawn to your measurements."),
    ("Craft", "Production in-house with quality checks at every stage."),
    ("Install", "A dedicated crew fits, tunes and hands over the space."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <style>{ABOUT_CSS}</style>
            <Hero
                title="About LUSSO"
                subtitle="A design studio and workshop under one roof, building interiors that feel made for you."
                image="/images/herki1.png"
            />
            <section class="about-block">
                <h2>{"Our story"}</h2>
                <p>
                    {"LUSSO began with a single kitchen and a simple belief: luxury is the feeling that a space \
                      was built around the people who use it. Today the same small team designs kitchens, \
                      wardrobes, shutters and partitions for homes that expect the same care."}
                </p>
            </section>
            <section class="about-grid">
                { for VALUES.iter().map(|(title, text)| html! {
                    <div class="about-card">
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </section>
            <section class="about-block">
                <h2>{"How we work"}</h2>
                <ol class="about-steps">
                    { for STEPS.iter().map(|(title, text)| html! {
                        <li><strong>{*title}</strong>{" "}{*text}</li>
                    }) }
                </ol>
            </section>
        </div>
    }
}

const ABOUT_CSS: &str = r#"
    .about-block {
        max-width: 760px;
        margin: 0 auto;
        padding: 5rem 2rem;
        color: #d8d2c4;
        line-height: 1.8;
    }
    .about-block h2 {
        font-family: 'Cormorant Garamond', serif;
        font-weight: 300;
        font-size: 2.4rem;
        color: #f5f0e6;
    }
    .about-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.5rem;
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 2rem;
    }
    .about-card {
        border: 1px solid rgba(201, 169, 110, 0.3);
        padding: 2rem;
        color: #d8d2c4;
    }
    .about-card h3 {
        color: #c9a96e;
        font-weight: 400;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        font-size: 0.9rem;
    }
    .about-steps li {
        margin: 1rem 0;
    }
    .about-steps strong {
        color: #c9a96e;
        font-weight: 400;
    }
"#;

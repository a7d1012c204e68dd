use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::Hero;
use crate::Route;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <style>{CONTACT_CSS}</style>
            <Hero
                title="Contact"
                subtitle="Visit the studio, call us, or send your vision and we will call you back."
                image="/images/herki3.png"
            />
            <section class="contact-grid">
                <div>
                    <h3>{"Call"}</h3>
                    <a href="tel:+15551235877">{"+1 (555) 123-LUSSO"}</a>
                </div>
                <div>
                    <h3>{"Write"}</h3>
                    <a href="mailto:hello@lusso.com">{"hello@lusso.com"}</a>
                </div>
                <div>
                    <h3>{"Studio hours"}</h3>
                    <p>{"Monday to Saturday, 10:00 to 19:00"}</p>
                </div>
            </section>
            <section class="contact-cta">
                <Link<Route> to={Route::StartVision} classes="hero-cta">{"Start your vision"}</Link<Route>>
            </section>
        </div>
    }
}

const CONTACT_CSS: &str = r#"
    .contact-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 2rem;
        max-width: 1000px;
        margin: 0 auto;
        padding: 5rem 2rem 2rem;
        text-align: center;
        color: #d8d2c4;
    }
    .contact-grid h3 {
        color: #c9a96e;
        font-weight: 400;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        font-size: 0.85rem;
    }
    .contact-grid a {
        color: #f5f0e6;
        text-decoration: none;
        font-size: 1.2rem;
    }
    .contact-cta {
        text-align: center;
        padding: 2rem 2rem 6rem;
    }
"#;

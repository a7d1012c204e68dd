use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-grid">
                <div>
                    <h3 class="footer-brand">{"LUSSO"}</h3>
                    <p>{"Bespoke kitchens, wardrobes, shutters and partitions, crafted for the way you live."}</p>
                </div>
                <div>
                    <h4>{"Explore"}</h4>
                    <Link<Route> to={Route::Products}>{"Products"}</Link<Route>>
                    <Link<Route> to={Route::Experience}>{"Experience"}</Link<Route>>
                    <Link<Route> to={Route::StartVision}>{"Start your vision"}</Link<Route>>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <a href="tel:+15551235877">{"+1 (555) 123-LUSSO"}</a>
                    <a href="mailto:hello@lusso.com">{"hello@lusso.com"}</a>
                </div>
                <div>
                    <h4>{"Follow"}</h4>
                    <a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    <a href="https://facebook.com" target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                </div>
            </div>
            <p class="footer-legal">{"© 2025 LUSSO. All rights reserved."}</p>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        background: #0b0b0b;
        color: #a8a294;
        padding: 4rem 2rem 2rem;
        border-top: 1px solid rgba(201, 169, 110, 0.2);
    }
    .footer-grid {
        max-width: 1100px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 2rem;
    }
    .footer-grid h4 {
        color: #c9a96e;
        font-weight: 400;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        font-size: 0.8rem;
    }
    .footer-grid a {
        display: block;
        color: #d8d2c4;
        text-decoration: none;
        margin: 0.4rem 0;
    }
    .footer-brand {
        letter-spacing: 0.35em;
        color: #f5f0e6;
    }
    .footer-legal {
        text-align: center;
        margin-top: 3rem;
        font-size: 0.8rem;
    }
"#;

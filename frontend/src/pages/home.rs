use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::brands::BrandsReel;
use crate::components::hero::Hero;
use crate::components::journey::Journey;
use crate::components::slideshow::Slideshow;
use crate::components::testimonials::Testimonials;
use crate::data::galleries::KITCHENS;
use crate::pages::products::ProductTiles;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>
            <Hero
                title="Luxury, tailored to the way you live"
                subtitle="Kitchens, wardrobes, shutters and partitions designed and crafted in-house."
                image="/images/herki.png"
                cta={Some((AttrValue::from("Start your vision"), Route::StartVision))}
            />
            <section class="home-intro">
                <h2>{"Designed around you"}</h2>
                <p>
                    {"Every LUSSO space begins with a conversation about how you cook, dress and unwind. \
                      We pair that with materials chosen to age beautifully."}
                </p>
            </section>
            <ProductTiles />
            <section class="home-featured">
                <Slideshow items={KITCHENS[0].items} />
            </section>
            <BrandsReel />
            <Journey />
            <Testimonials />
            <section class="home-closing">
                <h2>{"Ready when you are"}</h2>
                <Link<Route> to={Route::StartVision} classes="hero-cta">{"Book a callback"}</Link<Route>>
            </section>
        </div>
    }
}

const HOME_CSS: &str = r#"
    .home-intro,
    .home-closing {
        max-width: 760px;
        margin: 0 auto;
        padding: 6rem 2rem;
        text-align: center;
        color: #d8d2c4;
        line-height: 1.8;
    }
    .home-intro h2,
    .home-closing h2 {
        font-family: 'Cormorant Garamond', serif;
        font-weight: 300;
        font-size: 2.4rem;
        color: #f5f0e6;
    }
    .home-featured {
        height: 80vh;
        display: flex;
    }
"#;

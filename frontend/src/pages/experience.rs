use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::lightbox::Lightbox;
use crate::components::testimonials::Testimonials;
use crate::data::galleries::PORTFOLIO;
use crate::Route;

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <div class="experience-page">
            <Hero
                title="The LUSSO Experience"
                subtitle="A look inside finished homes, from gourmet kitchens to executive offices."
                image="/images/portfolio-living.jpg"
                cta={Some((AttrValue::from("Start your vision"), Route::StartVision))}
            />
            <Lightbox items={&PORTFOLIO[..]} />
            <Testimonials />
        </div>
    }
}

use yew::prelude::*;

use crate::components::framed_slideshow::framed_sections;
use crate::components::hero::Hero;
use crate::components::types_nav::TypesNav;
use crate::data::galleries::KITCHENS;
use crate::Route;

#[function_component(Kitchens)]
pub fn kitchens() -> Html {
    html! {
        <div class="product-page">
            <Hero
                title="Kitchens"
                subtitle="Islands for the social cook, galleys for the efficient one. Every layout built around how you gather."
                image="/images/herki.png"
                cta={Some((AttrValue::from("Design your kitchen"), Route::StartVision))}
            />
            <TypesNav sections={&KITCHENS[..]} />
            { framed_sections(&KITCHENS) }
        </div>
    }
}

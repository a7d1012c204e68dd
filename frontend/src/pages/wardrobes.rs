use yew::prelude::*;

use crate::components::framed_slideshow::framed_sections;
use crate::components::hero::Hero;
use crate::components::types_nav::TypesNav;
use crate::data::galleries::WARDROBES;
use crate::Route;

#[function_component(Wardrobes)]
pub fn wardrobes() -> Html {
    html! {
        <div class="product-page">
            <Hero
                title="Wardrobes"
                subtitle="Boutique walk-ins, quiet sliding systems and classic hinged doors, lit and organised to the last drawer."
                image="/images/wrdpp.png"
                cta={Some((AttrValue::from("Plan your wardrobe"), Route::StartVision))}
            />
            <TypesNav sections={&WARDROBES[..]} />
            { framed_sections(&WARDROBES) }
        </div>
    }
}

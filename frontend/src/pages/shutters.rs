use yew::prelude::*;

use crate::components::framed_slideshow::framed_sections;
use crate::components::hero::Hero;
use crate::components::types_nav::TypesNav;
use crate::data::galleries::SHUTTERS;
use crate::Route;

#[function_component(Shutters)]
pub fn shutters() -> Html {
    html! {
        <div class="product-page">
            <Hero
                title="Shutters"
                subtitle="Control light and privacy with hinged, bi-fold and sliding shutters made to measure."
                image="/images/shutters-hinged1.jpg"
                cta={Some((AttrValue::from("Choose your shutters"), Route::StartVision))}
            />
            <TypesNav sections={&SHUTTERS[..]} />
            { framed_sections(&SHUTTERS) }
        </div>
    }
}

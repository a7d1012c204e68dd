use yew::prelude::*;

use crate::components::framed_slideshow::framed_sections;
use crate::components::hero::Hero;
use crate::components::types_nav::TypesNav;
use crate::data::galleries::PARTITIONS;
use crate::Route;

#[function_component(Partitions)]
pub fn partitions() -> Html {
    html! {
        <div class="product-page">
            <Hero
                title="Partitions"
                subtitle="Divide a room without closing it off: metal and glass, open shelving or solid acoustic panels."
                image="/images/partition-glass1.jpg"
                cta={Some((AttrValue::from("Shape your space"), Route::StartVision))}
            />
            <TypesNav sections={&PARTITIONS[..]} />
            { framed_sections(&PARTITIONS) }
        </div>
    }
}

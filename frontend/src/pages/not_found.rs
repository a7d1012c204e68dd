use yew::prelude::*;

use crate::components::hero::Hero;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Hero
            title="Page not found"
            subtitle="The room you are looking for has moved."
            image="/images/herki3.png"
            cta={Some((AttrValue::from("Back home"), Route::Home))}
        />
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod lead_form;
mod data {
    pub mod galleries;
}
mod components {
    pub mod brands;
    pub mod footer;
    pub mod framed_slideshow;
    pub mod hero;
    pub mod journey;
    pub mod lightbox;
    pub mod menu;
    pub mod slideshow;
    pub mod testimonials;
    pub mod types_nav;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod experience;
    pub mod home;
    pub mod kitchens;
    pub mod not_found;
    pub mod partitions;
    pub mod products;
    pub mod shutters;
    pub mod start_vision;
    pub mod wardrobes;
}
mod utils {
    pub mod api;
}

use components::{footer::Footer, menu::TopRightMenu};
use pages::{
    about::About, contact::Contact, experience::Experience, home::Home, kitchens::Kitchens,
    not_found::NotFound, partitions::Partitions, products::Products, shutters::Shutters,
    start_vision::StartVision, wardrobes::Wardrobes,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/products")]
    Products,
    #[at("/kitchens")]
    Kitchens,
    #[at("/wardrobes")]
    Wardrobes,
    #[at("/shutters")]
    Shutters,
    #[at("/partitions")]
    Partitions,
    #[at("/experience")]
    Experience,
    #[at("/contact")]
    Contact,
    #[at("/startvision")]
    StartVision,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Switching to route: {}", routes.to_path());
    match routes {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Products => html! { <Products /> },
        Route::Kitchens => html! { <Kitchens /> },
        Route::Wardrobes => html! { <Wardrobes /> },
        Route::Shutters => html! { <Shutters /> },
        Route::Partitions => html! { <Partitions /> },
        Route::Experience => html! { <Experience /> },
        Route::Contact => html! { <Contact /> },
        Route::StartVision => html! { <StartVision /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let location = use_location();
    let path = location.map(|l| l.path().to_string());
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        path,
    );
    html! {}
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <ScrollToTop />
            <TopRightMenu />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

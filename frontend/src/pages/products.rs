use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::Hero;
use crate::Route;

const TILES: [(&str, &str, &str, Route); 4] = [
    ("Kitchens", "Islands, galleys, L and G layouts", "/images/islanda.jpg", Route::Kitchens),
    ("Wardrobes", "Walk-in, sliding and openable", "/images/walkina.jpg", Route::Wardrobes),
    ("Shutters", "Hinged, bi-fold and sliding", "/images/shutters-bifold1.jpg", Route::Shutters),
    ("Partitions", "Glass, shelving and acoustic", "/images/partition-shelf1.jpg", Route::Partitions),
];

#[function_component(ProductTiles)]
pub fn product_tiles() -> Html {
    html! {
        <section class="product-tiles">
            <style>{TILES_CSS}</style>
            { for TILES.iter().map(|(title, blurb, image, route)| html! {
                <Link<Route> to={route.clone()} classes="product-tile">
                    <img src={*image} alt={*title} loading="lazy" />
                    <div class="product-tile-text">
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                    </div>
                </Link<Route>>
            }) }
        </section>
    }
}

#[function_component(Products)]
pub fn products() -> Html {
    html! {
        <div class="products-page">
            <Hero
                title="Our Collections"
                subtitle="Four families of bespoke joinery, each finished by hand."
                image="/images/herki2.png"
            />
            <ProductTiles />
        </div>
    }
}

const TILES_CSS: &str = r#"
    .product-tiles {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
        max-width: 1200px;
        margin: 0 auto;
        padding: 4rem 2rem;
    }
    .product-tile {
        position: relative;
        display: block;
        aspect-ratio: 3 / 4;
        overflow: hidden;
        text-decoration: none;
    }
    .product-tile img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.8s ease;
    }
    .product-tile:hover img {
        transform: scale(1.06);
    }
    .product-tile-text {
        position: absolute;
        inset: auto 0 0 0;
        padding: 1.5rem;
        background: linear-gradient(transparent, rgba(0, 0, 0, 0.8));
        color: #f5f0e6;
    }
    .product-tile-text h3 {
        margin: 0;
        font-family: 'Cormorant Garamond', serif;
        font-weight: 400;
        font-size: 1.8rem;
    }
    .product-tile-text p {
        margin: 0.4rem 0 0;
        color: #d8d2c4;
        font-size: 0.9rem;
    }
"#;

use yew::prelude::*;

use crate::data::galleries::{Brand, BRANDS};

fn reel(brands: &[Brand], class: &'static str) -> Html {
    // the list is rendered twice so the loop has no visible seam
    html! {
        <div class={classes!("brands-reel", class)}>
            { for brands.iter().chain(brands.iter()).map(|b| html! {
                <div class="brand-tile">
                    <img src={b.logo} alt={b.name} loading="lazy" />
                </div>
            }) }
        </div>
    }
}

#[function_component(BrandsReel)]
pub fn brands_reel() -> Html {
    let (first, second) = BRANDS.split_at(BRANDS.len() / 2);
    html! {
        <section class="brands" aria-label="Key Collaborations">
            <style>{BRANDS_CSS}</style>
            <h2>{"Key Collaborations"}</h2>
            <div class="brands-band">
                { reel(first, "left") }
                { reel(second, "right") }
            </div>
            <p class="brands-note">{"Partnerships that ensure precision, durability, and quiet luxury."}</p>
        </section>
    }
}

const BRANDS_CSS: &str = r#"
    .brands {
        padding: 4rem 0;
        background: #0a1526;
        text-align: center;
        color: #f5f0e6;
    }
    .brands h2 {
        font-weight: 300;
        font-size: 2rem;
    }
    .brands-band {
        background: #fff;
        overflow: hidden;
        padding: 1.5rem 0;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .brands-reel {
        display: flex;
        gap: 2rem;
        width: max-content;
    }
    .brands-reel.left {
        animation: reel-left 48s linear infinite;
    }
    .brands-reel.right {
        animation: reel-right 50s linear infinite;
    }
    .brand-tile img {
        height: 56px;
        width: 140px;
        object-fit: contain;
    }
    .brands-note {
        margin-top: 2rem;
        color: rgba(245, 240, 230, 0.7);
    }
    @keyframes reel-left {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
    @keyframes reel-right {
        from { transform: translateX(-50%); }
        to { transform: translateX(0); }
    }
    @media (prefers-reduced-motion: reduce) {
        .brands-reel.left,
        .brands-reel.right {
            animation: none;
        }
    }
"#;

use leptos::prelude::*;
use leptos_router::components::A;

/// Category card on the home page.
#[component]
pub fn ProductCard(
    title: &'static str,
    description: &'static str,
    image: &'static str,
    alt: &'static str,
    link: &'static str,
) -> impl IntoView {
    view! {
        <article class="product-card">
            <img class="product-card-img" src=image alt=alt loading="lazy" decoding="async" />
            <div class="product-card-body">
                <h3 class="product-card-title">{title}</h3>
                <p class="product-card-text">{description}</p>
                <A href=link attr:class="btn btn-primary btn-sm">"Ver más"</A>
            </div>
        </article>
    }
}

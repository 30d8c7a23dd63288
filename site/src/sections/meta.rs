use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use pronto::routes::Route;
use pronto::seo::PageMeta;

use crate::use_config;

/// Title, description and canonical link for a page.
#[component]
pub fn PageMetaTags(route: Route) -> impl IntoView {
    let meta = PageMeta::for_route(route, &use_config());

    view! {
        <Title text=meta.title />
        <Meta name="description" content=meta.description />
        <Meta property="og:title" content=meta.title />
        <Meta property="og:description" content=meta.description />
        <Meta property="og:type" content="website" />
        {meta.canonical.map(|href| view! { <Link rel="canonical" href=href /> })}
    }
}

/// Inline `application/ld+json` block.
#[component]
pub fn JsonLd(json: String) -> impl IntoView {
    view! { <script type="application/ld+json" inner_html=json></script> }
}

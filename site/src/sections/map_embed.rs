use leptos::prelude::*;
use pronto::links;

use crate::use_config;

/// Google Maps iframe for the office address (no API key).
#[component]
pub fn MapEmbed() -> impl IntoView {
    let config = use_config();
    let src = links::maps_embed(&config.address);
    let open = links::maps_link(&config.address);
    let title = format!("Mapa: {}", config.address);

    view! {
        <div class="map-wrapper">
            <iframe
                class="map-frame"
                src=src
                title=title
                allowfullscreen=true
                referrerpolicy="no-referrer-when-downgrade"
                {..leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
            ></iframe>
            <div class="map-actions">
                <a href=open target="_blank" rel="noopener noreferrer" class="map-link">
                    "Ver en Google Maps"
                </a>
            </div>
        </div>
    }
}

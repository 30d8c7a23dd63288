use leptos::prelude::*;
use leptos_router::components::A;
use pronto::links;
use pronto::routes::Route;

use super::MapEmbed;
use crate::{browser, use_config};

const FACEBOOK: &str = "https://www.facebook.com/share/1599zuG32L/?mibextid=wwXIfr";
const INSTAGRAM: &str = "https://www.instagram.com/pronto_office2012";

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();
    let (map_open, set_map_open) = signal(false);

    let year = browser::current_year();
    let tel = links::tel_link(&config.fallback_phone);
    let phone_label = links::display_phone(&config.fallback_phone);
    let mail = format!("mailto:{}", config.contact_email);
    let maps = links::maps_link(&config.address);
    let chat = links::chat_send_link(links::ChatClient::Api, &config.fallback_phone, "");
    let address = config.address.clone();

    let nav = Route::NAV
        .iter()
        .filter_map(|route| route.path().map(|path| (path, route.label())))
        .map(|(path, label)| {
            view! {
                <li>
                    <A href=path attr:class="footer-link">{label}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer class="footer" itemscope itemtype="https://schema.org/Organization">
            <meta itemprop="name" content="Pronto Office" />
            <div class="container footer-grid">
                <div class="footer-brand">
                    <img src="/img/logo.png" alt="Pronto Office - logo institucional" class="footer-logo" loading="lazy" />
                    <p class="footer-tagline" itemprop="description">
                        "Tableros, suministros y soluciones gráficas con calidad y estilo."
                    </p>
                    <div class="footer-social" aria-label="Redes sociales">
                        <a href=FACEBOOK target="_blank" rel="noopener noreferrer me" itemprop="sameAs" class="social-link">"Facebook"</a>
                        <a href=INSTAGRAM target="_blank" rel="noopener noreferrer me" itemprop="sameAs" class="social-link">"Instagram"</a>
                        <a href=chat target="_blank" rel="noopener noreferrer" class="social-link">"WhatsApp"</a>
                    </div>
                </div>

                <nav class="footer-block" aria-label="Navegación del sitio">
                    <h3 class="footer-title">"Navegación"</h3>
                    <ul class="footer-list">{nav}</ul>
                </nav>

                <div class="footer-block">
                    <h3 class="footer-title">"Contacto"</h3>
                    <address class="footer-address" itemprop="address">{address}</address>
                    <p><a class="footer-link" href=tel itemprop="telephone">{phone_label}</a></p>
                    <p><a class="footer-link" href=mail.clone() itemprop="email">{config.contact_email.clone()}</a></p>
                    <p class="footer-schedule">"Lunes a Viernes: 8:00–18:00"</p>
                    <div class="footer-map-ctas">
                        <button type="button" class="btn btn-light btn-sm" on:click=move |_| set_map_open.set(true)>
                            "Ver mapa"
                        </button>
                        <a class="footer-link" href=maps target="_blank" rel="noopener noreferrer">
                            "Abrir en Google Maps"
                        </a>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container footer-bottom-inner">
                    <span>{format!("© {year} Pronto Office. Todos los derechos reservados.")}</span>
                    <a class="footer-link" href=mail>"Soporte"</a>
                </div>
            </div>

            <Show when=move || map_open.get()>
                <div class="modal-backdrop" on:click=move |_| set_map_open.set(false)>
                    <div
                        class="modal"
                        role="dialog"
                        aria-modal="true"
                        aria-label="Ubicación"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="modal-header">
                            <h2 class="modal-title">"Ubicación"</h2>
                            <button type="button" class="modal-close" aria-label="Cerrar" on:click=move |_| set_map_open.set(false)>
                                "×"
                            </button>
                        </div>
                        <MapEmbed />
                    </div>
                </div>
            </Show>
        </footer>
    }
}

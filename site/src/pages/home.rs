use leptos::prelude::*;
use leptos_router::components::A;
use pronto::catalog::{CARTELERAS_CORCHO, CARTELERAS_CORPORATIVAS, OTROS, TABLEROS};
use pronto::links;
use pronto::routes::Route;

use crate::sections::{PageMetaTags, ProductCard};
use crate::use_config;

const QUOTE_MESSAGE: &str = "Hola, me interesa cotizar tableros con Pronto Office.";

struct Category {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    route: Route,
}

const CATEGORIES: [Category; 4] = [
    Category {
        title: "Tableros en acrílico",
        description: "Borrables, blancos o cuadriculados, en marco de aluminio o madera.",
        image: "/img/tableros/tablero_acrilico_1.jpg",
        route: TABLEROS.route,
    },
    Category {
        title: "Carteleras de corcho",
        description: "Estándar, personalizadas, mixtas y con rodachines.",
        image: "/img/carteleras_corcho/cartelera_corcho1.jpg",
        route: CARTELERAS_CORCHO.route,
    },
    Category {
        title: "Carteleras corporativas",
        description: "En paño y con el logo de su empresa o colegio.",
        image: "/img/suministros/cartelera_pano1.jpg",
        route: CARTELERAS_CORPORATIVAS.route,
    },
    Category {
        title: "Otros productos",
        description: "Papelógrafos, borradores y murales.",
        image: "/img/otros_productos/otros_1.png",
        route: OTROS.route,
    },
];

const STATS: [(&str, &str); 3] = [
    ("20+", "Años de experiencia"),
    ("+20k", "Proyectos entregados"),
    ("24/7", "Soporte y atención"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_config();
    let chat = links::quote_link(
        config.whatsapp_phone.as_deref(),
        &config.contact_email,
        "Consulta Pronto Office",
        QUOTE_MESSAGE,
    );

    let stats = STATS
        .iter()
        .map(|(value, label)| {
            view! {
                <div class="stat-card" tabindex="0">
                    <strong>{*value}</strong>
                    <span>{*label}</span>
                </div>
            }
        })
        .collect_view();

    let categories = CATEGORIES
        .iter()
        .map(|category| {
            let link = category.route.path().unwrap_or("/");
            view! {
                <ProductCard
                    title=category.title
                    description=category.description
                    image=category.image
                    alt=category.title
                    link
                />
            }
        })
        .collect_view();

    view! {
        <PageMetaTags route=Route::Home />
        <section class="home-hero" id="home" aria-labelledby="home-title">
            <div class="container home-grid">
                <div class="home-card fade-up" role="region" aria-label="Presentación de Pronto Office">
                    <h1 id="home-title" class="home-title">
                        "Bienvenido a " <span class="highlight nowrap">"Pronto\u{a0}Office"</span>
                    </h1>

                    <div class="slogan" aria-label="Slogan principal de marca">
                        <p class="slogan-text">
                            <span class="slogan-strong">"Tableros"</span>" que "
                            <span class="slogan-accent">"inspiran"</span>" y "
                            <span class="slogan-accent">"organizan"</span>" tus ideas"
                        </p>
                    </div>

                    <ul class="feature-list" aria-label="Beneficios principales">
                        <li>
                            <CheckIcon />
                            <span>"Producimos tableros "<strong>"a tu medida"</strong></span>
                        </li>
                        <li>
                            <CheckIcon />
                            <span><strong>"Entregas a nivel nacional"</strong></span>
                        </li>
                    </ul>

                    <div class="home-ctas">
                        <A href="/contacto" attr:class="btn btn-primary btn-lg">"Contáctanos"</A>
                        <a class="btn btn-ghost" href=chat target="_blank" rel="noopener noreferrer">
                            "WhatsApp inmediato"
                        </a>
                    </div>

                    <div class="stats-row" aria-label="Métricas de confianza">{stats}</div>
                </div>

                <div class="home-media">
                    <img
                        src="/img/img_home.jpg"
                        alt="Oficina con tablero y laptop: espacio de trabajo moderno"
                        class="home-image"
                        loading="eager"
                        decoding="async"
                    />
                    <aside class="float-badge" aria-label="Calificación de clientes">
                        <span class="stars" aria-hidden="true">"★★★★★"</span>
                    </aside>
                </div>
            </div>
        </section>

        <section class="home-categories" aria-label="Nuestros productos">
            <div class="container card-grid">{categories}</div>
        </section>
    }
}

#[component]
fn CheckIcon() -> impl IntoView {
    view! {
        <svg class="check" width="22" height="22" viewBox="0 0 24 24" aria-hidden="true">
            <path fill="currentColor" d="M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z" />
        </svg>
    }
}

use leptos::prelude::*;
use pronto::links;
use pronto::routes::Route;

use crate::sections::PageMetaTags;
use crate::use_config;

const ABOUT_MESSAGE: &str = "Hola, vengo del sitio PRONTO OFFICE. Quiero conocer más de la empresa.";

const VALUES: [(&str, &str); 3] = [
    (
        "Servicio al Cliente",
        "Atención y asesoría oportuna de acuerdo a las necesidades del cliente.",
    ),
    (
        "Sostenibilidad",
        "Utilizamos materias primas sostenible con el medio ambiente.",
    ),
    (
        "Innovación",
        "Desarrollamos estrategias internas para mejorar procesos que benefician a nuestros Clientes.",
    ),
];

const METRICS: [(&str, &str); 3] = [
    ("20+", "Años de experiencia"),
    ("+20k", "Proyectos entregados"),
    ("24/7", "Soporte y atención"),
];

#[component]
pub fn NosotrosPage() -> impl IntoView {
    let config = use_config();
    let chat = links::quote_link(
        config.whatsapp_phone.as_deref(),
        &config.contact_email,
        "Información Pronto Office",
        ABOUT_MESSAGE,
    );

    let values = VALUES
        .iter()
        .map(|(name, text)| {
            view! {
                <li class="value-item">
                    <strong>{*name}</strong>
                    <p>{*text}</p>
                </li>
            }
        })
        .collect_view();

    let metrics = METRICS
        .iter()
        .map(|(number, label)| {
            view! {
                <li>
                    <span class="metric-number">{*number}</span>
                    <span class="metric-label">{*label}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <PageMetaTags route=Route::Nosotros />

        <section class="about-hero" aria-label="Presentación de la empresa">
            <div class="container about-hero-inner fade-up">
                <h1 class="about-title">"Sobre "<span class="brand">"Pronto Office"</span></h1>
                <p class="about-subtitle">
                    "20+ años fabricando tableros y carteleras con "
                    <strong>"estándares de calidad"</strong>" y "<strong>"servicio efectivo"</strong>". "
                    <span class="about-subline">
                        "Soluciones para empresas, educación y hogar, con instalación profesional."
                    </span>
                </p>
                <div class="page-hero-ctas">
                    <a class="btn btn-primary" href=chat.clone() target="_blank" rel="noopener noreferrer">
                        "Hablar por WhatsApp"
                    </a>
                    <a class="btn btn-ghost" href="#quienes-somos">"Conócenos"</a>
                </div>
            </div>
        </section>

        <section id="quienes-somos" class="about" aria-labelledby="h-somos">
            <div class="container about-grid">
                <div>
                    <h2 id="h-somos">"Quiénes somos"</h2>
                    <p class="about-lead">
                        "Somos una "<strong>"Empresa Colombiana"</strong>
                        ", que nace con la misión de proveer soluciones de "
                        <strong>"Tableros en acrílicos y corcho"</strong>
                        " para Empresas, Sector Educativo y hogar."
                    </p>
                    <p>
                        "Tenemos una trayectoria de "<strong>"más de 20 años"</strong>
                        " en el mercado, en la que nos hemos caracterizado en producir tableros con \
                         altos estándares de calidad y ofrecer un "
                        <strong>"servicio efectivo"</strong>"."
                    </p>
                </div>
                <div class="brand-block" aria-label="Identidad Pronto Office">
                    <img src="/img/logo.png" alt="Pronto Office" class="brand-logo" loading="lazy" />
                    <a class="btn btn-primary" href=chat target="_blank" rel="noopener noreferrer">
                        "Contáctanos"
                    </a>
                </div>
            </div>
        </section>

        <section class="values" aria-labelledby="h-valores">
            <div class="container">
                <h3 id="h-valores">"Nuestros valores empresariales"</h3>
                <ul class="values-list">{values}</ul>
            </div>
        </section>

        <section class="metrics" aria-label="Métricas de confianza">
            <div class="container">
                <ul class="metrics-list">{metrics}</ul>
            </div>
        </section>
    }
}

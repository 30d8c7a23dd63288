use leptos::prelude::*;
use leptos_router::components::A;
use pronto::catalog::{Gallery, GalleryItem, Preview, QuoteTarget};
use pronto::motion;
use pronto::seo;

use crate::sections::{JsonLd, Lightbox, PageHero, PageMetaTags, Tilt};
use crate::use_config;

/// Hero, card grid and lightbox for one product gallery.
#[component]
pub fn GalleryPage(gallery: &'static Gallery) -> impl IntoView {
    let config = use_config();
    let (preview, set_preview) = signal(Preview::default());

    let chat_href = gallery.chat_quote_link(&config);
    let quote_href = gallery.quote_href(&config);
    let json_ld = seo::item_list_json_ld(gallery, &config);

    let open = move |item: &'static GalleryItem| set_preview.update(|p| p.open(item));
    let close = Callback::new(move |_: ()| set_preview.update(Preview::close));

    let ctas = match gallery.quote_target {
        QuoteTarget::Chat => view! {
            <ExternalLink href=chat_href.clone() class="btn btn-primary">"Cotizar por WhatsApp"</ExternalLink>
            <a class="btn btn-ghost" href="#galeria">"Ver galería"</a>
        }
        .into_any(),
        QuoteTarget::ContactPage => view! {
            <A href="/contacto" attr:class="btn btn-primary">"Cotizar ahora"</A>
            <ExternalLink href=chat_href.clone() class="btn btn-ghost">"Hablar por WhatsApp"</ExternalLink>
        }
        .into_any(),
    };

    let cards = gallery
        .cards()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let quote_href = quote_href.clone();
            view! {
                <article class="gallery-card fade-up" style:animation-delay=motion::fade_delay(index)>
                    <Tilt>
                        <button
                            type="button"
                            class="gallery-media-btn"
                            aria-label=format!("Abrir {}", item.name)
                            on:click=move |_| open(item)
                        >
                            <img
                                class="gallery-media"
                                src=item.image
                                alt=item.alt
                                loading="lazy"
                                decoding="async"
                            />
                        </button>
                        <div class="gallery-card-body">
                            <h3 class="gallery-card-title">{item.name}</h3>
                            <p class="gallery-card-meta">
                                {item.size.map(|size| view! { <span class="badge">{size}</span> })}
                                <span class="badge badge-secondary">{item.tag.label()}</span>
                            </p>
                            <div class="gallery-card-actions">
                                <QuoteLink href=quote_href.clone() class="link">"Cotizar ahora"</QuoteLink>
                                <button type="button" class="preview-btn" on:click=move |_| open(item)>
                                    "Vista rápida"
                                </button>
                            </div>
                        </div>
                    </Tilt>
                </article>
            }
        })
        .collect_view();

    let lightbox_label = match gallery.quote_target {
        QuoteTarget::Chat => "Cotizar por WhatsApp",
        QuoteTarget::ContactPage => "Cotizar",
    };

    view! {
        <PageMetaTags route=gallery.route />
        <JsonLd json=json_ld />

        <PageHero
            title=gallery.title
            lead=gallery.lead
            note=gallery.note
            parallax_vh=gallery.parallax_vh
            label=format!("Hero {}", gallery.title)
        >
            {ctas}
        </PageHero>

        <section id="galeria" class="gallery-section" aria-label=format!("Galería de {}", gallery.title)>
            <div class="container card-grid">{cards}</div>
        </section>

        <Lightbox preview on_close=close quote_href=quote_href.clone() quote_label=lightbox_label />
    }
}

/// Link opened in a new tab.
#[component]
fn ExternalLink(href: String, class: &'static str, children: Children) -> impl IntoView {
    view! {
        <a class=class href=href target="_blank" rel="noopener noreferrer">
            {children()}
        </a>
    }
}

/// Router link for site paths, new tab for everything else.
#[component]
fn QuoteLink(href: String, class: &'static str, children: Children) -> impl IntoView {
    if href.starts_with('/') {
        view! { <A href=href attr:class=class>{children()}</A> }.into_any()
    } else {
        view! { <ExternalLink href class>{children()}</ExternalLink> }.into_any()
    }
}

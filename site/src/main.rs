// Pronto Office website, Leptos 0.8 CSR build

mod browser;
mod pages;
mod relay;
mod sections;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use pronto::catalog::Gallery;
use pronto::config::{ENV_RELAY_ID, ENV_WHATSAPP_PHONE, SiteConfig};
use pronto::routes::{Route, ScrollBehavior};

use pages::*;
use sections::*;

const EMBEDDED_CONFIG: &str = include_str!("../pronto.toml");

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Embedded TOML, then `PRONTO_*` values seen by the compiler.
fn load_config() -> SiteConfig {
    let config = SiteConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default site config");
        SiteConfig::default()
    });
    config.with_env(build_env)
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_WHATSAPP_PHONE => option_env!("PRONTO_WHATSAPP_PHONE"),
        ENV_RELAY_ID => option_env!("PRONTO_RELAY_ID"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Site configuration from context. Provided once by [`App`].
pub fn use_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(load_config());

    view! {
        <Router>
            <Nav />
            <ScrollToTop />
            <main id="contenido">
                <Pages />
            </main>
            <Footer />
            <FloatingChat />
        </Router>
    }
}

/// Renders the page for the current path.
#[component]
fn Pages() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| Route::resolve(&location.pathname.get()));

    move || match route.get() {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Nosotros => view! { <NosotrosPage /> }.into_any(),
        Route::Contacto => view! { <ContactoPage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
        gallery_route => match Gallery::for_route(gallery_route) {
            Some(gallery) => view! { <GalleryPage gallery /> }.into_any(),
            None => view! { <NotFoundPage /> }.into_any(),
        },
    }
}

/// Back to the top on every path change; instant under reduced motion.
#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        location.pathname.track();
        let behavior = ScrollBehavior::for_motion(browser::prefers_reduced_motion());
        browser::scroll_to_top(behavior);
    });
}

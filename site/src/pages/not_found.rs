use leptos::prelude::*;
use pronto::routes::Route;

use crate::sections::PageMetaTags;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageMetaTags route=Route::NotFound />
        <section class="not-found">
            <h1>"404"</h1>
            <p>"La ruta no existe. Verifica el enlace o el path."</p>
        </section>
    }
}

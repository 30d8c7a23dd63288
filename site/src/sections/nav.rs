use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use pronto::routes::Route;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_: ev::MouseEvent| set_menu_open.set(false);

    let links = Route::NAV
        .iter()
        .filter_map(|route| route.path().map(|path| (path, route.label())))
        .map(|(path, label)| {
            view! {
                <A href=path exact=true attr:class="nav-link" on:click=close_menu>
                    {label}
                </A>
            }
        })
        .collect_view();

    view! {
        <nav class="nav" aria-label="Navegación principal">
            <div class="nav-inner container">
                <A href="/" attr:class="nav-brand">
                    <img src="/img/logo.png" alt="Pronto Office" class="nav-logo" decoding="async" />
                </A>
                <button
                    type="button"
                    class="nav-toggle"
                    aria-controls="main-nav"
                    aria-label="Abrir menú"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                </button>
                <div
                    id="main-nav"
                    class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }
                >
                    {links}
                </div>
            </div>
        </nav>
    }
}

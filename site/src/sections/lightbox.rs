use leptos::ev;
use leptos::prelude::*;
use pronto::catalog::Preview;

/// Modal preview of one gallery item. Closes on the backdrop, the close
/// button or Escape.
#[component]
pub fn Lightbox(
    #[prop(into)] preview: Signal<Preview>,
    on_close: Callback<()>,
    quote_href: String,
    quote_label: &'static str,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && preview.get_untracked().is_open() {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let external = quote_href.starts_with("http");

    move || {
        preview.get().item().map(|item| {
            let href = quote_href.clone();
            view! {
                <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                    <div
                        class="modal"
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby="modal-foto"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="modal-header">
                            <h2 id="modal-foto" class="modal-title">{item.name}</h2>
                            <button
                                type="button"
                                class="modal-close"
                                aria-label="Cerrar"
                                on:click=move |_| on_close.run(())
                            >
                                "×"
                            </button>
                        </div>
                        <img class="lightbox-img" src=item.image alt=item.alt decoding="sync" />
                        <div class="modal-footer">
                            <a
                                class="btn btn-primary"
                                href=href
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                            >
                                {quote_label}
                            </a>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use pronto::motion;

use crate::browser;

/// Hero banner with a parallax background. The background layer is not
/// rendered at all under reduced motion.
#[component]
pub fn PageHero(
    title: &'static str,
    lead: &'static str,
    #[prop(default = None)] note: Option<&'static str>,
    /// Background travel once the hero has scrolled away, in `vh`.
    parallax_vh: f64,
    #[prop(into)] label: String,
    children: Children,
) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let (offset, set_offset) = signal(0.0_f64);
    let animate = !browser::prefers_reduced_motion();

    if animate {
        let handle = window_event_listener(ev::scroll, move |_| {
            let Some(el) = section.get_untracked() else {
                return;
            };
            let progress = motion::scroll_progress(
                browser::scroll_y(),
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            );
            set_offset.set(motion::parallax_offset(progress, parallax_vh));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <section class="page-hero" node_ref=section aria-label=label>
            <Show when=move || animate>
                <div
                    class="page-hero-bg"
                    aria-hidden="true"
                    style:transform=move || format!("translateY({:.2}vh)", offset.get())
                ></div>
            </Show>
            <div class="container page-hero-inner fade-up">
                <h1 class="page-hero-title">{title}</h1>
                <p class="page-hero-lead">
                    {lead}
                    {note.map(|note| view! { <span class="page-hero-subline">{note}</span> })}
                </p>
                <div class="page-hero-ctas">{children()}</div>
            </div>
        </section>
    }
}

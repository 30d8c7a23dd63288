use leptos::html;
use leptos::prelude::*;
use pronto::motion::{self, TILT_MAX_DEG};
use web_sys::PointerEvent;

use crate::browser;

/// 3D tilt that follows the pointer and resets when it leaves.
/// Renders a plain wrapper under reduced motion.
#[component]
pub fn Tilt(#[prop(default = TILT_MAX_DEG)] max_deg: f64, children: Children) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(motion::rest_transform());
    let enabled = !browser::prefers_reduced_motion();

    let on_move = move |ev: PointerEvent| {
        if !enabled {
            return;
        }
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        set_transform.set(motion::tilt_transform(
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
            rect.width(),
            rect.height(),
            max_deg,
        ));
    };

    view! {
        <div
            class="tilt"
            node_ref=node
            style:transform=move || if enabled { transform.get() } else { String::new() }
            on:pointermove=on_move
            on:pointerleave=move |_| set_transform.set(motion::rest_transform())
        >
            {children()}
        </div>
    }
}

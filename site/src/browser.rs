//! Thin wrappers over the `web_sys` calls the views need.
//!
//! Every helper degrades to a harmless default when there is no window.

use pronto::routes::ScrollBehavior;
use web_sys::ScrollToOptions;

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn scroll_to_top(behavior: ScrollBehavior) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(match behavior {
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    });
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn user_agent() -> String {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Navigate the current tab, used for the `mailto:` hand-off.
pub fn open_href(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(href) {
            tracing::warn!(?err, "could not open link");
        }
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

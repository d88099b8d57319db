//! Thin wrappers over the router's navigation and window scrolling.

use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Navigate function bound to the current router. Must be called inside `<Router>`.
pub fn use_navigate_to() -> impl Fn(&str) + Clone + 'static {
    let navigate = use_navigate();
    move |path: &str| {
        log::debug!("navigate: {}", path);
        navigate(path, NavigateOptions::default());
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

use super::pages::{current_page, route_path, swipe_target, tab_activation, TabActivation};
use super::tab_strip::DevToolsTabs;
use crate::shared::components::menu_button::MenuButton;
use crate::shared::i18n::use_localizer;
use crate::shared::navigation::{scroll_to_top, use_navigate_to};
use crate::shared::swipe::{use_horizontal_swipe, SwipeDirection};
use contracts::devtools::PANEL;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

/// Developer tools panel: fixed header with toolbar and tabs, the selected
/// page below it.
///
/// The selected tab is derived from the URL only; clicks and swipes
/// navigate and the selection follows the new URL.
#[component]
pub fn DeveloperToolsPanel() -> impl IntoView {
    let i18n = use_localizer();
    let location = use_location();
    let navigate_to = use_navigate_to();

    let page = Memo::new(move |_| {
        current_page(&route_path(&location.pathname.get(), PANEL.url_path)).to_string()
    });

    // panel titles live in the backend's "title" category
    i18n.load_backend_translation("title");

    let on_tab_activated = {
        let navigate_to = navigate_to.clone();
        Callback::new(move |selected: String| {
            match tab_activation(&page.get_untracked(), &selected) {
                TabActivation::Navigate(path) => navigate_to(&path),
                TabActivation::ScrollToTop => scroll_to_top(),
            }
        })
    };

    let on_swipe = move |direction: SwipeDirection| {
        let navigate_to = navigate_to.clone();
        Callback::new(move |()| {
            if let Some(path) = swipe_target(direction, &page.get_untracked()) {
                navigate_to(&path);
                scroll_to_top();
            }
        })
    };

    let swipe = use_horizontal_swipe(on_swipe(SwipeDirection::Left), on_swipe(SwipeDirection::Right));

    view! {
        <div
            class="devtools-panel"
            on:touchstart=move |ev| swipe.touch_start(&ev)
            on:touchend=move |ev| swipe.touch_end(&ev)
            on:touchcancel=move |_| swipe.touch_cancel()
        >
            <header class="app-header app-header--fixed">
                <div class="app-toolbar">
                    <MenuButton />
                    <div class="app-toolbar__title">{move || i18n.localize(PANEL.title_key)}</div>
                </div>
                <DevToolsTabs selected=page on_activate=on_tab_activated />
            </header>
            <div class="devtools-router">
                <Outlet />
            </div>
        </div>
    }
}

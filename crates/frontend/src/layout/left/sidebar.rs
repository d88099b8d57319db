//! Sidebar with the panel list. The developer tools panel expands into its pages.

use crate::layout::global_context::use_app_context;
use crate::panels::developer_tools::pages::{current_page, route_path};
use crate::shared::i18n::use_localizer;
use crate::shared::icons::icon;
use crate::shared::navigation::use_navigate_to;
use contracts::devtools::{page_path, PAGES, PANEL};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_localizer();
    let location = use_location();
    let navigate_to = use_navigate_to();

    let in_panel = move || location.pathname.get().starts_with(PANEL.url_path);
    let active_page = Memo::new(move |_| {
        current_page(&route_path(&location.pathname.get(), PANEL.url_path)).to_string()
    });
    let expanded = RwSignal::new(true);

    view! {
        <div class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=in_panel
                style:padding-left="12px"
                on:click=move |_| expanded.update(|v| *v = !*v)
            >
                <div class="app-sidebar__item-content">
                    {icon(PANEL.icon.unwrap_or_default())}
                    <span>{move || i18n.localize(PANEL.title_key)}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=move || expanded.get()
                >
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=move || expanded.get()>
                <div class="app-sidebar__children">
                    {PAGES.iter().map(|page| {
                        let name = page.name;
                        let title_key = page.title_key();
                        let navigate_to = navigate_to.clone();
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || active_page.get() == name
                                style:padding-left="10px"
                                on:click=move |_| {
                                    navigate_to(&page_path(name));
                                    ctx.close_sidebar_if_overlay();
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(page.icon.unwrap_or_default())}
                                    <span>{move || i18n.localize(&title_key)}</span>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

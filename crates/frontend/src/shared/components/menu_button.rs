use crate::layout::global_context::use_app_context;
use crate::shared::i18n::use_localizer;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Hamburger button toggling the sidebar.
///
/// Shown when the sidebar is an overlay or hidden; a docked, open sidebar
/// needs no button.
#[component]
pub fn MenuButton() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_localizer();
    let visible = move || ctx.narrow.get() || !ctx.sidebar_open.get();

    view! {
        <Show
            when=visible
            fallback=|| view! { <span class="menu-button__placeholder"></span> }
        >
            <Button
                class="menu-button"
                appearance=ButtonAppearance::Subtle
                on_click=move |_| ctx.toggle_sidebar()
                attr:title=move || i18n.localize("ui.sidebar.sidebar_toggle")
            >
                {icon("menu")}
            </Button>
        </Show>
    }
}

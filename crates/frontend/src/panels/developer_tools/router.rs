use super::page_view::DevToolsPageView;
use super::pages::{current_page, route_path};
use crate::layout::global_context::use_app_context;
use contracts::devtools::{default_page, find_page, page_path, PANEL};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use leptos_router::NavigateOptions;

/// Renders the page named by the URL. Unknown pages go to the default page.
#[component]
pub fn DeveloperToolsRouter() -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();
    let page = Memo::new(move |_| {
        current_page(&route_path(&location.pathname.get(), PANEL.url_path)).to_string()
    });

    move || match find_page(&page.get()) {
        Some(meta) => view! { <DevToolsPageView page=*meta narrow=ctx.narrow /> }.into_any(),
        None => {
            log::warn!("unknown developer tools page '{}'", page.get_untracked());
            view! { <DefaultPageRedirect /> }.into_any()
        }
    }
}

/// Replaces the current history entry with the default page.
#[component]
pub fn DefaultPageRedirect() -> impl IntoView {
    view! {
        <Redirect
            path=page_path(default_page().name)
            options=NavigateOptions {
                replace: true,
                ..Default::default()
            }
        />
    }
}

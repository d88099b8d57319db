use crate::layout::Shell;
use crate::panels::developer_tools::{
    DefaultPageRedirect, DeveloperToolsPanel, DeveloperToolsRouter,
};
use crate::shared::i18n::use_localizer;
use contracts::devtools::PANEL;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    let i18n = use_localizer();

    view! {
        <div class="not-found">
            <h2>{move || i18n.localize("ui.errors.not_found")}</h2>
            <A href=PANEL.url_path>{move || i18n.localize("ui.errors.back_home")}</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <ParentRoute path=path!("/developer-tools") view=DeveloperToolsPanel>
                        <Route path=path!("") view=DefaultPageRedirect />
                        <Route path=path!(":page") view=DeveloperToolsRouter />
                    </ParentRoute>
                    <Route path=path!("/") view=|| view! { <Redirect path=PANEL.url_path /> } />
                </Routes>
            </Shell>
        </Router>
    }
}

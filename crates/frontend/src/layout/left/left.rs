use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let is_open = move || ctx.sidebar_open.get();
    let is_overlay = move || ctx.narrow.get();

    view! {
        // backdrop closes the overlay sidebar
        <Show when=move || is_open() && is_overlay()>
            <div class="left__backdrop" on:click=move |_| ctx.sidebar_open.set(false)></div>
        </Show>
        <div
            data-zone="left"
            class="left"
            class:hidden=move || !is_open()
            class:left--overlay=is_overlay
        >
            {children()}
        </div>
    }
}

pub mod global_context;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |  (panel header, tabs, page)  |
/// +-----------+------------------------------+
/// ```
///
/// No top bar: each panel renders its own header with a menu button.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}

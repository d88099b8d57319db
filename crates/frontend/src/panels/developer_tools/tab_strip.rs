use crate::shared::i18n::use_localizer;
use contracts::devtools::PAGES;
use leptos::prelude::*;

/// Scrollable tab strip. Emits the page name of every activated tab,
/// including the already selected one.
#[component]
pub fn DevToolsTabs(
    /// Name of the selected page
    #[prop(into)]
    selected: Signal<String>,
    on_activate: Callback<String>,
) -> impl IntoView {
    let i18n = use_localizer();

    view! {
        <nav id="devtools-tabs" class="devtools-tabs" role="tablist">
            {PAGES
                .iter()
                .map(|page| {
                    let name = page.name;
                    let title_key = page.title_key();
                    let is_selected = Memo::new(move |_| selected.with(|s| s == name));
                    view! {
                        <button
                            class="devtools-tab"
                            class:devtools-tab--selected=move || is_selected.get()
                            role="tab"
                            data-page-name=name
                            aria-selected=move || if is_selected.get() { "true" } else { "false" }
                            on:click=move |_| on_activate.run(name.to_string())
                        >
                            {move || i18n.localize(&title_key)}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

use crate::shared::i18n::use_localizer;
use crate::shared::icons::icon;
use contracts::shared::metadata::PageMetadata;
use leptos::prelude::*;

/// Frame of a developer tools page: heading and description.
#[component]
pub fn DevToolsPageView(page: PageMetadata, #[prop(into)] narrow: Signal<bool>) -> impl IntoView {
    let i18n = use_localizer();
    let title_key = page.title_key();
    let description_key = page.description_key();

    view! {
        <section
            class="devtools-page"
            class:devtools-page--narrow=move || narrow.get()
            data-page-name=page.name
        >
            <header class="devtools-page__header">
                {icon(page.icon.unwrap_or_default())}
                <h2 class="devtools-page__title">{move || i18n.localize(&title_key)}</h2>
            </header>
            <p class="devtools-page__description">{move || i18n.localize(&description_key)}</p>
        </section>
    }
}

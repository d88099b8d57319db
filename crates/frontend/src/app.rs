use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::i18n::Localizer;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    ctx.init_viewport_tracking();
    provide_context(ctx);

    let localizer = Localizer::new();
    localizer.load_backend_translation("ui");
    provide_context(localizer);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}

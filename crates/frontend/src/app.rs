use crate::routes::routes::AppRoutes;
use crate::shared::config::FormConfig;
use crate::shared::i18n::{I18nProvider, LanguageSwitcher};
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shared by every page through context.
    provide_context(ToastService::new(FormConfig::default().toast_duration));

    view! {
        <I18nProvider>
            <header class="app-header">
                <LanguageSwitcher />
            </header>
            <main class="app-main">
                <AppRoutes />
            </main>
            <ToastHost />
        </I18nProvider>
    }
}

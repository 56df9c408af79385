use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Portal settings for every page
    provide_context(load_config());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}

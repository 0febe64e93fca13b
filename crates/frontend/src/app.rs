use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::notify::{Notifications, Toaster};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_environment();
    log::info!("SIMANJA dashboard using API at {}", config.api_base_url);
    provide_context(config);
    provide_context(Notifications::new());
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
        <Toaster />
    }
}

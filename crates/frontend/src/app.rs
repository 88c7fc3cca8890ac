use crate::domain::a001_client_scope::store::ClientScopeStore;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::i18n::I18n;
use crate::shared::navigation::Navigator;
use crate::shared::providers::LoginProviders;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load console configuration: {:#}", e);
            return view! {
                <div class="page__content error">"Console configuration is invalid"</div>
            }
            .into_any();
        }
    };

    provide_context(I18n::new(&config.i18n.locale));
    provide_context(LoginProviders::from_config(&config));
    provide_context(config);
    provide_context(Navigator::new());
    provide_context(ClientScopeStore::new());

    view! {
        <AppRoutes />
    }
    .into_any()
}

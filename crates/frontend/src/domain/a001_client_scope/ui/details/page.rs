//! Host page for the client scope form

use super::view::ScopeForm;
use crate::domain::a001_client_scope::store::ClientScopeStore;
use crate::routes::routes::Route;
use crate::shared::components::ui::PageHeader;
use crate::shared::config::ConsoleConfig;
use crate::shared::i18n::use_i18n;
use crate::shared::navigation::use_navigator;
use contracts::domain::a001_client_scope::ClientScope;
use leptos::prelude::*;

#[component]
pub fn ClientScopeDetailsPage(id: Option<String>) -> impl IntoView {
    let store = use_context::<ClientScopeStore>().expect("ClientScopeStore not found");
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig not found");
    let navigator = use_navigator();
    let i18n = use_i18n();

    let listing = Route::ClientScopes.to_path(&config.routes.client_scopes);
    let is_edit = id.is_some();

    let found = match &id {
        Some(id) => store.get(id),
        None => Some(ClientScope::new_for_insert()),
    };

    let Some(initial) = found else {
        log::warn!("client scope {:?} not found", id);
        return view! {
            <div class="page page--detail">
                <div class="page__content">{i18n.t("client-scopes:notFound")}</div>
            </div>
        }
        .into_any();
    };

    // Follow the stored record so a save elsewhere re-seeds the form
    let client_scope = Signal::derive({
        let id = id.clone();
        move || match &id {
            Some(id) => store.get(id).unwrap_or_else(|| initial.clone()),
            None => initial.clone(),
        }
    });

    let save = Callback::new(move |scope: ClientScope| {
        let stored = store.upsert(scope);
        log::info!("client scope '{}' saved", stored.name);
        navigator.push(&listing);
    });

    let title = if is_edit {
        Signal::derive(move || client_scope.with(|s| s.name.clone()))
    } else {
        Signal::stored(i18n.t("client-scopes:createClientScope"))
    };

    view! {
        <div class="page page--detail">
            <PageHeader
                title=title
                subtitle=i18n.t("client-scopes:clientScopeDetails")
            >
                {()}
            </PageHeader>
            <div class="page__content">
                <ScopeForm client_scope=client_scope save=save />
            </div>
        </div>
    }
    .into_any()
}

use crate::domain::a001_client_scope::ui::{ClientScopeDetailsPage, ClientScopeList};
use crate::shared::config::ConsoleConfig;
use crate::shared::i18n::use_i18n;
use crate::shared::navigation::use_navigator;
use contracts::domain::a001_client_scope::form::LISTING_PATH;
use leptos::prelude::*;

/// Screen selected by the current path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ClientScopes,
    /// `id` is `None` on the create screen
    ClientScopeDetails { id: Option<String> },
    NotFound,
}

impl Route {
    /// Resolve `path` below the client scope listing `base`
    /// (`/client-scopes/`, `/client-scopes/new`, `/client-scopes/<id>`).
    pub fn from_path(path: &str, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        if path == "/" || path.is_empty() {
            return Route::ClientScopes;
        }

        let rest = match path.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_matches('/'),
            _ => return Route::NotFound,
        };

        match rest {
            "" => Route::ClientScopes,
            "new" => Route::ClientScopeDetails { id: None },
            segment if !segment.contains('/') => {
                let id = urlencoding::decode(segment)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| segment.to_string());
                Route::ClientScopeDetails { id: Some(id) }
            }
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Route::ClientScopes | Route::NotFound => format!("{}/", base),
            Route::ClientScopeDetails { id: None } => format!("{}/new", base),
            Route::ClientScopeDetails { id: Some(id) } => {
                format!("{}/{}", base, urlencoding::encode(id))
            }
        }
    }
}

/// Id segment of the current details route, `None` when creating
pub fn use_route_id() -> Option<String> {
    let navigator = use_navigator();
    let base = use_context::<ConsoleConfig>()
        .map(|c| c.routes.client_scopes)
        .unwrap_or_else(|| LISTING_PATH.to_string());
    match Route::from_path(&navigator.path.get_untracked(), &base) {
        Route::ClientScopeDetails { id } => id,
        _ => None,
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let navigator = use_navigator();
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig context not found");
    let i18n = use_i18n();

    navigator.init_history_integration();

    let base = config.routes.client_scopes.clone();
    let route = Memo::new(move |_| Route::from_path(&navigator.path.get(), &base));

    view! {
        <main class="page">
            {move || match route.get() {
                Route::ClientScopes => view! { <ClientScopeList /> }.into_any(),
                Route::ClientScopeDetails { id } => {
                    view! { <ClientScopeDetailsPage id=id /> }.into_any()
                }
                Route::NotFound => {
                    view! { <div class="page__content">{i18n.t("client-scopes:notFound")}</div> }
                        .into_any()
                }
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "/client-scopes/";

    #[test]
    fn test_listing() {
        assert_eq!(Route::from_path("/client-scopes/", BASE), Route::ClientScopes);
        assert_eq!(Route::from_path("/client-scopes", BASE), Route::ClientScopes);
        assert_eq!(Route::from_path("/", BASE), Route::ClientScopes);
    }

    #[test]
    fn test_create_and_edit() {
        assert_eq!(
            Route::from_path("/client-scopes/new", BASE),
            Route::ClientScopeDetails { id: None }
        );
        assert_eq!(
            Route::from_path("/client-scopes/a%20b", BASE),
            Route::ClientScopeDetails {
                id: Some("a b".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/clients/1", BASE), Route::NotFound);
        assert_eq!(Route::from_path("/client-scopes-x", BASE), Route::NotFound);
        assert_eq!(Route::from_path("/client-scopes/1/mappers", BASE), Route::NotFound);
    }

    #[test]
    fn test_to_path() {
        assert_eq!(Route::ClientScopes.to_path(BASE), "/client-scopes/");
        assert_eq!(
            Route::ClientScopeDetails { id: None }.to_path("/client-scopes"),
            "/client-scopes/new"
        );
        assert_eq!(
            Route::ClientScopeDetails {
                id: Some("a b".into())
            }
            .to_path(BASE),
            "/client-scopes/a%20b"
        );
    }
}

use contracts::domain::a001_client_scope::ClientScope;
use leptos::prelude::*;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Client scopes saved during this browser session
#[derive(Clone, Copy)]
pub struct ClientScopeStore {
    scopes: RwSignal<Vec<ClientScope>>,
}

impl ClientScopeStore {
    pub fn new() -> Self {
        Self {
            scopes: RwSignal::new(builtin_scopes()),
        }
    }

    pub fn list(&self) -> Vec<ClientScope> {
        self.scopes.get()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.with(Vec::is_empty)
    }

    pub fn get(&self, id: &str) -> Option<ClientScope> {
        self.scopes
            .with(|scopes| scopes.iter().find(|s| s.id.as_deref() == Some(id)).cloned())
    }

    /// Insert or replace by id; returns the stored scope
    pub fn upsert(&self, scope: ClientScope) -> ClientScope {
        let mut stored = None;
        self.scopes.update(|scopes| stored = Some(upsert_into(scopes, scope)));
        stored.unwrap_or_default()
    }
}

impl Default for ClientScopeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// New scopes get a fresh UUID, existing ones are replaced in place
pub fn upsert_into(scopes: &mut Vec<ClientScope>, mut scope: ClientScope) -> ClientScope {
    let id = scope
        .id
        .get_or_insert_with(|| Uuid::new_v4().to_string())
        .clone();

    match scopes.iter_mut().find(|s| s.id.as_deref() == Some(id.as_str())) {
        Some(existing) => {
            log::info!("client scope '{}' updated", scope.name);
            *existing = scope.clone();
        }
        None => {
            log::info!("client scope '{}' created with id {}", scope.name, id);
            scopes.push(scope.clone());
        }
    }
    scope
}

fn builtin_scopes() -> Vec<ClientScope> {
    let scope = |name: &str, description: &str, consent_text: &str, order: &str| ClientScope {
        id: Some(Uuid::new_v4().to_string()),
        name: name.to_string(),
        description: Some(description.to_string()),
        protocol: Some("openid-connect".to_string()),
        attributes: BTreeMap::from([
            ("display-on-consent-screen".to_string(), "true".to_string()),
            ("consent-screen-text".to_string(), consent_text.to_string()),
            ("include-in-token-scope".to_string(), "true".to_string()),
            ("gui-order".to_string(), order.to_string()),
        ]),
        extra: BTreeMap::new(),
    };

    vec![
        scope(
            "email",
            "OpenID Connect built-in scope: email",
            "${emailScopeConsentText}",
            "",
        ),
        scope(
            "profile",
            "OpenID Connect built-in scope: profile",
            "${profileScopeConsentText}",
            "",
        ),
    ]
}

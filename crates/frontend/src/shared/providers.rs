use crate::shared::config::ConsoleConfig;
use leptos::prelude::*;

/// Login protocol identifiers known to the server, in display order.
/// The first entry is the default for new client scopes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginProviders(pub Vec<String>);

impl LoginProviders {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self(config.providers.login.clone())
    }
}

pub fn use_login_providers() -> Vec<String> {
    match use_context::<LoginProviders>() {
        Some(providers) => providers.0,
        None => {
            log::warn!("LoginProviders not in context, no protocols to offer");
            Vec::new()
        }
    }
}

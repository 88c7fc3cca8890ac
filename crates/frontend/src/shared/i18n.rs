//! Text lookup for namespaced message keys (`common:save`,
//! `client-scopes-help:guiOrder`, ...). Screens only name keys; the catalog
//! below is the bundled English text. Unknown keys render as themselves.

use leptos::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("common:name", "Name"),
        ("common:description", "Description"),
        ("common:required", "Required field"),
        ("common:maxLength", "Max length {{length}}"),
        ("common:save", "Save"),
        ("common:cancel", "Cancel"),
        ("common:on", "On"),
        ("common:off", "Off"),
        ("common:create", "Create"),
        ("client-scopes:clientScopes", "Client scopes"),
        ("client-scopes:createClientScope", "Create client scope"),
        ("client-scopes:clientScopeDetails", "Client scope details"),
        ("client-scopes:emptyList", "No client scopes yet"),
        ("client-scopes:notFound", "Client scope not found"),
        ("client-scopes:protocol", "Type"),
        ("client-scopes:selectEncryptionType", "Select encryption type"),
        ("client-scopes:displayOnConsentScreen", "Display on consent screen"),
        ("client-scopes:consentScreenText", "Consent screen text"),
        ("client-scopes:includeInTokenScope", "Include in token scope"),
        ("client-scopes:guiOrder", "Display Order"),
        ("client-scopes:shouldBeANumber", "Should be a number"),
        (
            "client-scopes-help:name",
            "Name of the client scope. Must be unique in the realm. Name should not contain space characters as it is used as value of scope parameter",
        ),
        ("client-scopes-help:description", "Description of the client scope"),
        (
            "client-scopes-help:protocol",
            "Which SSO protocol configuration is being supplied by this client scope",
        ),
        (
            "client-scopes-help:displayOnConsentScreen",
            "If on, and this client scope is added to some client with consent required, the text specified by 'Consent Screen Text' will be displayed on consent screen. If off, this client scope will not be displayed on the consent screen",
        ),
        (
            "client-scopes-help:consentScreenText",
            "Text that will be shown on the consent screen when this client scope is added to some client with consent required. Defaults to name of client scope if it is not filled",
        ),
        (
            "client-scopes-help:includeInTokenScope",
            "If on, the name of this client scope will be added to the access token property 'scope' as well as to the Token Introspection Endpoint response. If off, this client scope will be omitted from the token and from the Token Introspection Endpoint response.",
        ),
        (
            "client-scopes-help:guiOrder",
            "Specify order of the provider in GUI (such as in Consent page) as integer.",
        ),
    ])
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I18n {
    catalog: &'static HashMap<&'static str, &'static str>,
}

impl I18n {
    pub fn new(locale: &str) -> Self {
        if locale != "en" {
            log::warn!("No catalog for locale '{}', using 'en'", locale);
        }
        Self { catalog: &*EN }
    }

    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// Lookup with `{{name}}` placeholders replaced from `args`
    pub fn t_with(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut text = self
            .catalog
            .get(key)
            .copied()
            .unwrap_or(key)
            .to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{{{}}}}}", name), value);
        }
        text
    }
}

/// Translator from context, falling back to the bundled catalog
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| I18n::new("en"))
}

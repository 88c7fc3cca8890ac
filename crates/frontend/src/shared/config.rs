use serde::Deserialize;

/// localStorage key holding a TOML override of the console configuration
pub const CONFIG_STORAGE_KEY: &str = "admin-console.config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub routes: RoutesConfig,
    pub providers: ProvidersConfig,
    pub i18n: I18nConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RoutesConfig {
    /// Listing page of client scopes; details live below it
    pub client_scopes: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProvidersConfig {
    /// Login protocols offered when creating a client scope, first is default
    pub login: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct I18nConfig {
    pub locale: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[routes]
client_scopes = "/client-scopes/"

[providers]
login = ["openid-connect", "saml"]

[i18n]
locale = "en"
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<ConsoleConfig> {
    let config: ConsoleConfig = toml::from_str(contents)?;
    Ok(config)
}

pub fn default_config() -> anyhow::Result<ConsoleConfig> {
    parse_config(DEFAULT_CONFIG)
}

/// Load configuration
///
/// Search order:
/// 1. TOML text stored in localStorage under [`CONFIG_STORAGE_KEY`]
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<ConsoleConfig> {
    if let Some(contents) = stored_config() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage '{}'", CONFIG_STORAGE_KEY);
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring stored config: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    default_config()
}

fn stored_config() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.routes.client_scopes, "/client-scopes/");
        assert_eq!(config.providers.login, vec!["openid-connect", "saml"]);
        assert_eq!(config.i18n.locale, "en");
    }

    #[test]
    fn test_partial_config_is_rejected() {
        assert!(parse_config("[routes]\nclient_scopes = \"/x/\"").is_err());
    }

    #[test]
    fn test_override() {
        let config = parse_config(
            r#"
            [routes]
            client_scopes = "/master/client-scopes/"
            [providers]
            login = ["saml"]
            [i18n]
            locale = "en"
            "#,
        )
        .unwrap();
        assert_eq!(config.providers.login, vec!["saml"]);
    }
}

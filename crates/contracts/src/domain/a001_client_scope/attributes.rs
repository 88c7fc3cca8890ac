use std::collections::BTreeMap;

pub const DISPLAY_ON_CONSENT_SCREEN: &str = "display-on-consent-screen";
pub const CONSENT_SCREEN_TEXT: &str = "consent-screen-text";
pub const INCLUDE_IN_TOKEN_SCOPE: &str = "include-in-token-scope";
pub const GUI_ORDER: &str = "gui-order";

/// Attribute keys whose values are booleans spelled as text
pub const FLAG_ATTRIBUTES: [&str; 2] = [DISPLAY_ON_CONSENT_SCREEN, INCLUDE_IN_TOKEN_SCOPE];

/// Typed view over the client scope attribute bag.
///
/// The REST representation only carries strings. Conversion happens in
/// [`decode`](Self::decode) and [`encode`](Self::encode) and nowhere else, so
/// the rest of the console works with `bool` and never with `"true"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientScopeAttributes {
    pub display_on_consent_screen: bool,
    pub consent_screen_text: Option<String>,
    pub include_in_token_scope: bool,
    /// Raw text as entered; see [`gui_order_value`](Self::gui_order_value)
    pub gui_order: Option<String>,
    /// Keys this console does not edit, preserved verbatim
    pub other: BTreeMap<String, String>,
}

impl ClientScopeAttributes {
    pub fn decode(map: &BTreeMap<String, String>) -> Self {
        let mut other = map.clone();
        let display_on_consent_screen = other
            .remove(DISPLAY_ON_CONSENT_SCREEN)
            .is_some_and(|v| decode_flag(&v));
        let include_in_token_scope = other
            .remove(INCLUDE_IN_TOKEN_SCOPE)
            .is_some_and(|v| decode_flag(&v));
        let consent_screen_text = other.remove(CONSENT_SCREEN_TEXT);
        let gui_order = other.remove(GUI_ORDER);

        Self {
            display_on_consent_screen,
            consent_screen_text,
            include_in_token_scope,
            gui_order,
            other,
        }
    }

    /// Flags are always written, as `"true"` or `"false"`.
    pub fn encode(&self) -> BTreeMap<String, String> {
        let mut map = self.other.clone();
        map.insert(
            DISPLAY_ON_CONSENT_SCREEN.to_string(),
            encode_flag(self.display_on_consent_screen).to_string(),
        );
        map.insert(
            INCLUDE_IN_TOKEN_SCOPE.to_string(),
            encode_flag(self.include_in_token_scope).to_string(),
        );
        if let Some(text) = &self.consent_screen_text {
            map.insert(CONSENT_SCREEN_TEXT.to_string(), text.clone());
        }
        if let Some(order) = &self.gui_order {
            map.insert(GUI_ORDER.to_string(), order.clone());
        }
        map
    }

    /// Numeric ordering hint; `None` when unset, empty or not a number.
    pub fn gui_order_value(&self) -> Option<u32> {
        self.gui_order.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Only the exact text `"true"` is on; `"TRUE"`, `" true"` and the like are off
pub fn decode_flag(value: &str) -> bool {
    value == "true"
}

pub fn encode_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_decode_flags_and_defaults() {
        let attrs = ClientScopeAttributes::decode(&map(&[(DISPLAY_ON_CONSENT_SCREEN, "true")]));
        assert!(attrs.display_on_consent_screen);
        assert!(!attrs.include_in_token_scope);
        assert_eq!(attrs.consent_screen_text, None);
        assert_eq!(attrs.gui_order, None);
    }

    #[test]
    fn test_encode_always_writes_flags() {
        let encoded = ClientScopeAttributes::decode(&map(&[(GUI_ORDER, "3")])).encode();
        assert_eq!(
            encoded,
            map(&[
                (DISPLAY_ON_CONSENT_SCREEN, "false"),
                (GUI_ORDER, "3"),
                (INCLUDE_IN_TOKEN_SCOPE, "false"),
            ])
        );
    }

    #[test]
    fn test_unknown_keys_survive() {
        let source = map(&[("custom.flag", "x"), (CONSENT_SCREEN_TEXT, "${emailScopeConsentText}")]);
        let encoded = ClientScopeAttributes::decode(&source).encode();
        assert_eq!(encoded.get("custom.flag").map(String::as_str), Some("x"));
        assert_eq!(
            encoded.get(CONSENT_SCREEN_TEXT).map(String::as_str),
            Some("${emailScopeConsentText}")
        );
    }

    #[test]
    fn test_gui_order_value() {
        let mut attrs = ClientScopeAttributes::default();
        assert_eq!(attrs.gui_order_value(), None);
        attrs.gui_order = Some("".into());
        assert_eq!(attrs.gui_order_value(), None);
        attrs.gui_order = Some("007".into());
        assert_eq!(attrs.gui_order_value(), Some(7));
        attrs.gui_order = Some("12a".into());
        assert_eq!(attrs.gui_order_value(), None);
    }

    #[test]
    fn test_flag_text() {
        assert!(decode_flag("true"));
        assert!(!decode_flag("TRUE"));
        assert!(!decode_flag(" true"));
        assert!(!decode_flag("yes"));
        assert_eq!(encode_flag(true), "true");
    }
}

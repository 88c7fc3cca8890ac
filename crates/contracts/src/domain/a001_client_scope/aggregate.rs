use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use super::attributes::ClientScopeAttributes;

// ============================================================================
// Representation
// ============================================================================

/// Client scope as exchanged with the admin REST API.
///
/// Only the properties the details form edits are typed; everything else the
/// server sends (protocol mappers, realm flags, ...) rides along in `extra`
/// and is written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// Flat string bag; typed access goes through [`ClientScopeAttributes`]
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ClientScope {
    /// Empty scope for the "create" screen
    pub fn new_for_insert() -> Self {
        Self::default()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Decode the attribute bag into typed settings
    pub fn typed_attributes(&self) -> ClientScopeAttributes {
        ClientScopeAttributes::decode(&self.attributes)
    }

    /// Content fingerprint used to tell a genuinely different record from a
    /// freshly constructed copy of the same data.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.id.hash(&mut hasher);
        self.name.hash(&mut hasher);
        self.description.hash(&mut hasher);
        self.protocol.hash(&mut hasher);
        self.attributes.hash(&mut hasher);
        for (key, value) in &self.extra {
            key.hash(&mut hasher);
            value.to_string().hash(&mut hasher);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_keeps_unknown_properties() {
        let json = r#"{
            "id": "b3c1",
            "name": "email",
            "protocol": "openid-connect",
            "attributes": {"gui-order": "3"},
            "protocolMappers": [{"name": "email"}]
        }"#;
        let scope: ClientScope = serde_json::from_str(json).unwrap();
        assert_eq!(scope.name, "email");
        assert_eq!(scope.description, None);
        assert!(scope.extra.contains_key("protocolMappers"));

        let back = serde_json::to_value(&scope).unwrap();
        assert_eq!(back["protocolMappers"][0]["name"], "email");
        assert!(back.get("description").is_none());
    }

    #[test]
    fn test_missing_name_defaults_to_empty() {
        let scope: ClientScope = serde_json::from_str(r#"{"attributes": {}}"#).unwrap();
        assert_eq!(scope.name, "");
        assert!(scope.is_new());
    }

    #[test]
    fn test_fingerprint_tracks_content_not_identity() {
        let a = ClientScope {
            name: "email".into(),
            ..Default::default()
        };
        let b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let mut c = a.clone();
        c.attributes.insert("gui-order".into(), "1".into());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}

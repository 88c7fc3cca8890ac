//! Form controller behind the client scope details screen.
//!
//! Holds the registered fields, the current [`FormState`] and the rules, and
//! turns a valid state back into a [`ClientScope`] for the caller's save
//! callback. Rendering lives in the frontend; everything here is synchronous
//! and free of UI types.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use super::aggregate::ClientScope;
use super::attributes::{
    encode_flag, ClientScopeAttributes, CONSENT_SCREEN_TEXT, DISPLAY_ON_CONSENT_SCREEN,
    FLAG_ATTRIBUTES, GUI_ORDER, INCLUDE_IN_TOKEN_SCOPE,
};
use crate::shared::form::flatten::{field_name, flatten, unflatten};
use crate::shared::form::{
    FieldRule, FieldSpec, FieldValue, FormAction, FormSchema, FormState, ValidationErrors,
};
use crate::shared::navigation::Navigate;
use crate::shared::select_toggle::{SelectEvent, SelectState};

pub const LISTING_PATH: &str = "/client-scopes/";

pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const PROTOCOL: &str = "protocol";
pub const ATTRIBUTES: &str = "attributes";

pub const DESCRIPTION_MAX_LENGTH: usize = 255;

static GUI_ORDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]*)$").expect("gui-order pattern compiles"));

/// Form field name of a client scope attribute
pub fn attribute_field(key: &str) -> String {
    field_name(ATTRIBUTES, key)
}

/// Whether the screen creates a scope or edits the one named in the route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn from_route_id(id: Option<String>) -> Self {
        match id {
            Some(id) => FormMode::Edit { id },
            None => FormMode::Create,
        }
    }

    /// The protocol is chosen once, when the scope is created
    pub fn shows_protocol(&self) -> bool {
        matches!(self, FormMode::Create)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The save callback was called with the assembled scope
    Saved,
    /// At least one field failed; the callback was not called
    Blocked(ValidationErrors),
}

#[derive(Debug, Clone)]
pub struct ScopeForm {
    mode: FormMode,
    providers: Vec<String>,
    listing_path: String,
    schema: FormSchema,
    state: FormState,
    /// Fingerprint of the last record seeded into the form
    loaded: Option<u64>,
    /// `id`, raw attributes and unknown top-level properties of the loaded
    /// record
    passthrough: ClientScope,
    protocol_select: SelectState,
}

impl ScopeForm {
    pub fn new(mode: FormMode, providers: Vec<String>) -> Self {
        let schema = Self::build_schema(&mode, &providers);
        let mut form = Self {
            mode,
            providers,
            listing_path: LISTING_PATH.to_string(),
            schema,
            state: FormState::default(),
            loaded: None,
            passthrough: ClientScope::default(),
            protocol_select: SelectState::Closed,
        };
        let defaults = form.with_defaults(BTreeMap::new());
        form.state.apply(FormAction::Seed(defaults), &form.schema);
        form
    }

    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }

    fn build_schema(mode: &FormMode, providers: &[String]) -> FormSchema {
        let mut fields = vec![
            FieldSpec::text(NAME).rule(FieldRule::Required),
            FieldSpec::text(DESCRIPTION).rule(FieldRule::MaxLength(DESCRIPTION_MAX_LENGTH)),
        ];
        if mode.shows_protocol() {
            fields.push(
                FieldSpec::text(PROTOCOL)
                    .rule(FieldRule::Required)
                    .default_text(providers.first().cloned()),
            );
        }
        fields.extend([
            FieldSpec::flag(attribute_field(DISPLAY_ON_CONSENT_SCREEN), false),
            FieldSpec::text(attribute_field(CONSENT_SCREEN_TEXT)),
            FieldSpec::flag(attribute_field(INCLUDE_IN_TOKEN_SCOPE), false),
            FieldSpec::text(attribute_field(GUI_ORDER)).rule(FieldRule::Pattern {
                regex: &GUI_ORDER_PATTERN,
                hint_key: "client-scopes:shouldBeANumber",
            }),
        ]);
        FormSchema::new(fields)
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Seed the form from `scope`.
    ///
    /// Returns `false` and keeps in-progress edits when `scope` carries the
    /// same content as the record already loaded.
    pub fn initialize(&mut self, scope: &ClientScope) -> bool {
        let fingerprint = scope.fingerprint();
        if self.loaded == Some(fingerprint) {
            return false;
        }
        log::debug!(
            "seeding client scope form from '{}' ({:?})",
            scope.name,
            self.mode
        );

        self.loaded = Some(fingerprint);
        self.passthrough = ClientScope {
            id: scope.id.clone(),
            attributes: scope.attributes.clone(),
            extra: scope.extra.clone(),
            ..Default::default()
        };
        self.protocol_select = SelectState::Closed;

        let values = self.with_defaults(Self::seed_values(scope));
        self.state.apply(FormAction::Seed(values), &self.schema);
        true
    }

    fn seed_values(scope: &ClientScope) -> BTreeMap<String, FieldValue> {
        let mut values = BTreeMap::new();
        values.insert(NAME.to_string(), FieldValue::Text(scope.name.clone()));
        if let Some(description) = &scope.description {
            values.insert(DESCRIPTION.to_string(), FieldValue::Text(description.clone()));
        }
        if let Some(protocol) = &scope.protocol {
            values.insert(PROTOCOL.to_string(), FieldValue::Text(protocol.clone()));
        }

        let attributes = scope.typed_attributes();
        for (field, value) in flatten(ATTRIBUTES, &attributes.other) {
            values.insert(field, FieldValue::Text(value));
        }
        values.insert(
            attribute_field(DISPLAY_ON_CONSENT_SCREEN),
            FieldValue::Flag(attributes.display_on_consent_screen),
        );
        values.insert(
            attribute_field(INCLUDE_IN_TOKEN_SCOPE),
            FieldValue::Flag(attributes.include_in_token_scope),
        );
        if let Some(text) = attributes.consent_screen_text {
            values.insert(attribute_field(CONSENT_SCREEN_TEXT), FieldValue::Text(text));
        }
        if let Some(order) = attributes.gui_order {
            values.insert(attribute_field(GUI_ORDER), FieldValue::Text(order));
        }
        values
    }

    fn with_defaults(&self, mut values: BTreeMap<String, FieldValue>) -> BTreeMap<String, FieldValue> {
        for spec in self.schema.fields() {
            if let Some(default) = &spec.default {
                values
                    .entry(spec.name.clone())
                    .or_insert_with(|| default.clone());
            }
        }
        values
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.state.apply(
            FormAction::SetText {
                field: field.to_string(),
                value: value.into(),
            },
            &self.schema,
        );
    }

    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.state.apply(
            FormAction::SetFlag {
                field: field.to_string(),
                value,
            },
            &self.schema,
        );
    }

    pub fn toggle_flag(&mut self, field: &str) {
        self.state.apply(
            FormAction::ToggleFlag {
                field: field.to_string(),
            },
            &self.schema,
        );
    }

    pub fn toggle_protocol_select(&mut self) {
        let (next, _) = self.protocol_select.next::<String>(SelectEvent::Toggle);
        self.protocol_select = next;
    }

    /// Pick a protocol from the dropdown. Ignored while editing, the
    /// protocol of an existing scope is fixed.
    pub fn select_protocol(&mut self, protocol: impl Into<String>) {
        let (next, picked) = self
            .protocol_select
            .next(SelectEvent::Select(protocol.into()));
        self.protocol_select = next;

        match picked {
            Some(protocol) if self.mode.shows_protocol() => self.set_text(PROTOCOL, protocol),
            Some(protocol) => {
                log::warn!("protocol '{}' ignored for an existing client scope", protocol)
            }
            None => {}
        }
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Validate everything and hand the assembled scope to `save`.
    ///
    /// `save` is called at most once, and only when every rule passes.
    pub fn submit<F>(&mut self, save: F) -> SubmitOutcome
    where
        F: FnOnce(ClientScope),
    {
        self.state.apply(FormAction::SubmitAttempted, &self.schema);
        let errors = self.state.errors();
        if !errors.is_empty() {
            log::debug!("client scope form blocked by {:?}", errors.fields());
            return SubmitOutcome::Blocked(errors.clone());
        }

        let scope = self.payload();
        log::info!("submitting client scope '{}'", scope.name);
        save(scope);
        SubmitOutcome::Saved
    }

    /// Leave the screen without saving
    pub fn cancel<N>(&self, navigator: &N)
    where
        N: Navigate + ?Sized,
    {
        navigator.navigate(&self.listing_path);
    }

    /// Current values assembled into a scope, `attributes.*` folded back
    /// into the attribute map with flags spelled as text.
    ///
    /// A flag the user never touched keeps the text it was loaded with, so
    /// `"TRUE"` shows as off but is not rewritten to `"false"`.
    pub fn payload(&self) -> ClientScope {
        let values = self.state.values();
        let flat: Vec<(&String, String)> = values
            .iter()
            .map(|(field, value)| {
                let text = match value {
                    FieldValue::Text(s) => s.clone(),
                    FieldValue::Flag(b) => encode_flag(*b).to_string(),
                };
                (field, text)
            })
            .collect();
        let mut attributes = ClientScopeAttributes::decode(&unflatten(ATTRIBUTES, flat)).encode();
        for key in FLAG_ATTRIBUTES {
            if self.state.is_touched(&attribute_field(key)) {
                continue;
            }
            if let Some(raw) = self.passthrough.attributes.get(key) {
                attributes.insert(key.to_string(), raw.clone());
            }
        }

        let text = |field: &str| {
            values
                .get(field)
                .and_then(FieldValue::as_text)
                .map(str::to_string)
        };

        ClientScope {
            id: self.passthrough.id.clone(),
            name: self.state.text(NAME),
            description: text(DESCRIPTION),
            protocol: text(PROTOCOL),
            attributes,
            extra: self.passthrough.extra.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        self.state.errors()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    pub fn listing_path(&self) -> &str {
        &self.listing_path
    }

    pub fn shows_protocol(&self) -> bool {
        self.mode.shows_protocol()
    }

    pub fn protocol_select(&self) -> SelectState {
        self.protocol_select
    }

    /// All rules pass for the current values, whether or not they were shown
    pub fn is_valid(&self) -> bool {
        self.schema.validate(self.state.values()).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldError;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn providers() -> Vec<String> {
        vec!["openid-connect".to_string(), "saml".to_string()]
    }

    fn edit_form() -> ScopeForm {
        ScopeForm::new(
            FormMode::Edit {
                id: "b3c1".to_string(),
            },
            providers(),
        )
    }

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Runs submit and returns every scope handed to the save callback
    fn submit_all(form: &mut ScopeForm) -> (SubmitOutcome, Vec<ClientScope>) {
        let saved = RefCell::new(Vec::new());
        let outcome = form.submit(|scope| saved.borrow_mut().push(scope));
        (outcome, saved.into_inner())
    }

    #[test]
    fn test_empty_name_blocks_create() {
        let mut form = ScopeForm::new(FormMode::Create, providers());
        form.initialize(&ClientScope {
            name: String::new(),
            description: Some(String::new()),
            ..Default::default()
        });

        let (outcome, saved) = submit_all(&mut form);
        assert!(saved.is_empty());
        match outcome {
            SubmitOutcome::Blocked(errors) => {
                assert_eq!(errors.get(NAME), Some(&FieldError::Required));
                assert_eq!(errors.len(), 1);
            }
            SubmitOutcome::Saved => panic!("empty name must not be saved"),
        }
        assert_eq!(
            form.errors().get(NAME).map(FieldError::message_key),
            Some("common:required")
        );
    }

    #[test]
    fn test_missing_name_blocks() {
        let scope: ClientScope = serde_json::from_str(r#"{"description": "x"}"#).unwrap();
        let mut form = edit_form();
        form.initialize(&scope);

        let (_, saved) = submit_all(&mut form);
        assert!(saved.is_empty());
    }

    #[test]
    fn test_edit_submits_defaults_for_flags() {
        let mut form = edit_form();
        assert!(!form.shows_protocol());
        form.initialize(&ClientScope {
            name: "email".into(),
            description: Some("Email scope".into()),
            attributes: attrs(&[(GUI_ORDER, "3")]),
            ..Default::default()
        });

        let (outcome, saved) = submit_all(&mut form);
        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(
            saved,
            vec![ClientScope {
                name: "email".into(),
                description: Some("Email scope".into()),
                attributes: attrs(&[
                    (GUI_ORDER, "3"),
                    (DISPLAY_ON_CONSENT_SCREEN, "false"),
                    (INCLUDE_IN_TOKEN_SCOPE, "false"),
                ]),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn test_unedited_round_trip() {
        let json = r#"{
            "id": "b3c1",
            "name": "profile",
            "description": "OpenID Connect built-in scope: profile",
            "protocol": "openid-connect",
            "attributes": {
                "display-on-consent-screen": "true",
                "consent-screen-text": "${profileScopeConsentText}",
                "include-in-token-scope": "true",
                "gui-order": "",
                "custom.setting": "kept"
            },
            "protocolMappers": [{"name": "family name"}]
        }"#;
        let scope: ClientScope = serde_json::from_str(json).unwrap();
        let mut form = edit_form();
        form.initialize(&scope);

        let (_, saved) = submit_all(&mut form);
        assert_eq!(saved, vec![scope]);
    }

    #[test]
    fn test_create_defaults_protocol_to_first_provider() {
        let mut form = ScopeForm::new(FormMode::Create, providers());
        form.initialize(&ClientScope {
            name: "roles".into(),
            ..Default::default()
        });

        let (_, saved) = submit_all(&mut form);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].protocol.as_deref(), Some("openid-connect"));
    }

    #[test]
    fn test_create_without_providers_requires_protocol() {
        let mut form = ScopeForm::new(FormMode::Create, Vec::new());
        form.initialize(&ClientScope {
            name: "roles".into(),
            ..Default::default()
        });

        let (outcome, saved) = submit_all(&mut form);
        assert!(saved.is_empty());
        assert!(matches!(outcome, SubmitOutcome::Blocked(e) if e.contains(PROTOCOL)));
    }

    #[test]
    fn test_description_length_limit() {
        let mut form = edit_form();
        form.initialize(&ClientScope {
            name: "email".into(),
            ..Default::default()
        });

        form.set_text(DESCRIPTION, "x".repeat(256));
        let (outcome, saved) = submit_all(&mut form);
        assert!(saved.is_empty());
        match outcome {
            SubmitOutcome::Blocked(errors) => assert_eq!(
                errors.get(DESCRIPTION),
                Some(&FieldError::MaxLength { max: 255 })
            ),
            SubmitOutcome::Saved => panic!("overlong description must not be saved"),
        }

        form.set_text(DESCRIPTION, "x".repeat(255));
        let (_, saved) = submit_all(&mut form);
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn test_gui_order_must_be_digits() {
        let mut form = edit_form();
        form.initialize(&ClientScope {
            name: "email".into(),
            ..Default::default()
        });
        let field = attribute_field(GUI_ORDER);

        for bad in ["12a", "-1", "1.5", " 3", "３"] {
            form.set_text(&field, bad);
            let (_, saved) = submit_all(&mut form);
            assert!(saved.is_empty(), "'{}' accepted", bad);
            assert_eq!(
                form.errors().get(&field).map(FieldError::message_key),
                Some("client-scopes:shouldBeANumber")
            );
        }

        for good in ["", "0", "0042"] {
            form.set_text(&field, good);
            assert!(form.errors().get(&field).is_none());
            let (_, saved) = submit_all(&mut form);
            assert_eq!(saved.len(), 1, "'{}' rejected", good);
            assert_eq!(saved[0].attributes.get(GUI_ORDER).map(String::as_str), Some(good));
        }
    }

    #[test]
    fn test_toggle_twice_restores_value() {
        let mut form = edit_form();
        form.initialize(&ClientScope {
            name: "email".into(),
            ..Default::default()
        });
        let field = attribute_field(DISPLAY_ON_CONSENT_SCREEN);

        form.toggle_flag(&field);
        assert_eq!(
            form.payload().attributes.get(DISPLAY_ON_CONSENT_SCREEN).map(String::as_str),
            Some("true")
        );
        form.toggle_flag(&field);
        assert_eq!(
            form.payload().attributes.get(DISPLAY_ON_CONSENT_SCREEN).map(String::as_str),
            Some("false")
        );
    }

    #[test]
    fn test_same_content_keeps_edits() {
        let scope = ClientScope {
            name: "email".into(),
            ..Default::default()
        };
        let mut form = edit_form();
        assert!(form.initialize(&scope));
        form.set_text(NAME, "edited");

        assert!(!form.initialize(&scope.clone()));
        assert_eq!(form.state().text(NAME), "edited");

        let other = ClientScope {
            name: "phone".into(),
            ..Default::default()
        };
        assert!(form.initialize(&other));
        assert_eq!(form.state().text(NAME), "phone");
        assert!(!form.state().is_dirty());
    }

    #[test]
    fn test_protocol_select() {
        let mut form = ScopeForm::new(FormMode::Create, providers());
        assert_eq!(form.protocol_select(), SelectState::Closed);

        form.toggle_protocol_select();
        assert!(form.protocol_select().is_open());
        form.select_protocol("saml");
        assert_eq!(form.protocol_select(), SelectState::Closed);
        assert_eq!(form.state().text(PROTOCOL), "saml");
    }

    #[test]
    fn test_protocol_fixed_when_editing() {
        let mut form = edit_form();
        form.initialize(&ClientScope {
            name: "email".into(),
            protocol: Some("openid-connect".into()),
            ..Default::default()
        });
        form.select_protocol("saml");

        let (_, saved) = submit_all(&mut form);
        assert_eq!(saved[0].protocol.as_deref(), Some("openid-connect"));
    }

    #[test]
    fn test_cancel_navigates_without_saving() {
        let visited = RefCell::new(Vec::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());

        let mut form = ScopeForm::new(FormMode::Create, providers());
        form.set_text(attribute_field(GUI_ORDER).as_str(), "bad");
        form.cancel(&navigator);

        let form = edit_form().with_listing_path("/master/client-scopes");
        form.cancel(&navigator);

        assert_eq!(
            visited.into_inner(),
            vec![LISTING_PATH.to_string(), "/master/client-scopes".to_string()]
        );
    }

    #[test]
    fn test_validity_without_submit() {
        let mut form = edit_form();
        form.initialize(&ClientScope {
            name: "email".into(),
            ..Default::default()
        });
        assert!(form.is_valid());
        assert!(form.errors().is_empty());

        form.set_text(NAME, "");
        assert!(!form.is_valid());
        assert!(form.errors().contains(NAME));
    }

    #[test]
    fn test_non_canonical_flags_show_off_and_save_unchanged() {
        let loaded = attrs(&[(DISPLAY_ON_CONSENT_SCREEN, "TRUE"), (INCLUDE_IN_TOKEN_SCOPE, "yes")]);
        let mut form = edit_form();
        form.initialize(&ClientScope {
            name: "email".into(),
            attributes: loaded.clone(),
            ..Default::default()
        });
        assert_eq!(form.state().flag(&attribute_field(DISPLAY_ON_CONSENT_SCREEN)), Some(false));
        assert_eq!(form.state().flag(&attribute_field(INCLUDE_IN_TOKEN_SCOPE)), Some(false));

        let (_, saved) = submit_all(&mut form);
        assert_eq!(saved[0].attributes, loaded);

        // Once toggled, the flag is written in canonical form
        form.toggle_flag(&attribute_field(DISPLAY_ON_CONSENT_SCREEN));
        let (_, saved) = submit_all(&mut form);
        assert_eq!(
            saved[0].attributes,
            attrs(&[(DISPLAY_ON_CONSENT_SCREEN, "true"), (INCLUDE_IN_TOKEN_SCOPE, "yes")])
        );
    }

    #[test]
    fn test_empty_attribute_key_round_trips() {
        let scope = ClientScope {
            id: Some("b3c1".into()),
            name: "email".into(),
            attributes: attrs(&[
                ("", "v"),
                (DISPLAY_ON_CONSENT_SCREEN, "false"),
                (INCLUDE_IN_TOKEN_SCOPE, "true"),
            ]),
            ..Default::default()
        };
        let mut form = edit_form();
        form.initialize(&scope);

        let (_, saved) = submit_all(&mut form);
        assert_eq!(saved, vec![scope]);
    }

    #[test]
    fn test_description_limit_counts_surrogate_pairs() {
        let mut form = edit_form();
        form.initialize(&ClientScope {
            name: "email".into(),
            ..Default::default()
        });

        form.set_text(DESCRIPTION, "😀".repeat(128));
        let (_, saved) = submit_all(&mut form);
        assert!(saved.is_empty());
        assert_eq!(
            form.errors().get(DESCRIPTION),
            Some(&FieldError::MaxLength { max: 255 })
        );

        form.set_text(DESCRIPTION, format!("{}a", "😀".repeat(127)));
        let (_, saved) = submit_all(&mut form);
        assert_eq!(saved.len(), 1);
    }
}

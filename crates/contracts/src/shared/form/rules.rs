use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

use super::state::FieldValue;

// ============================================================================
// Errors
// ============================================================================

/// Why a single field is invalid.
///
/// The display text is for logs; the screen shows the localized text behind
/// [`message_key`](Self::message_key).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("value is required")]
    Required,

    #[error("value must be at most {max} characters")]
    MaxLength { max: usize },

    #[error("value does not match the expected format")]
    PatternMismatch { hint_key: &'static str },
}

impl FieldError {
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldError::Required => "common:required",
            FieldError::MaxLength { .. } => "common:maxLength",
            FieldError::PatternMismatch { hint_key } => *hint_key,
        }
    }

    /// Interpolation arguments for the localized message
    pub fn message_args(&self) -> Vec<(&'static str, String)> {
        match self {
            FieldError::MaxLength { max } => vec![("length", max.to_string())],
            _ => Vec::new(),
        }
    }
}

/// Field name -> first failing rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub(crate) fn set(&mut self, field: &str, error: Option<FieldError>) {
        match error {
            Some(e) => {
                self.0.insert(field.to_string(), e);
            }
            None => {
                self.0.remove(field);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

// ============================================================================
// Rules
// ============================================================================

#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Text must be present and non-empty
    Required,
    /// Text may hold at most this many UTF-16 code units, the length a
    /// browser input reports
    MaxLength(usize),
    /// Text, when present, must match the whole pattern
    Pattern {
        regex: &'static Regex,
        hint_key: &'static str,
    },
}

impl FieldRule {
    pub fn check(&self, value: Option<&FieldValue>) -> Result<(), FieldError> {
        // Flags cannot be invalid
        if let Some(FieldValue::Flag(_)) = value {
            return Ok(());
        }
        let text = value.and_then(FieldValue::as_text).unwrap_or("");

        match self {
            FieldRule::Required if text.is_empty() => Err(FieldError::Required),
            FieldRule::MaxLength(max) if text.encode_utf16().count() > *max => {
                Err(FieldError::MaxLength { max: *max })
            }
            FieldRule::Pattern { regex, hint_key } if !regex.is_match(text) => {
                Err(FieldError::PatternMismatch {
                    hint_key: *hint_key,
                })
            }
            _ => Ok(()),
        }
    }
}

/// One registered form field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub rules: Vec<FieldRule>,
    /// Value filled in when the loaded record does not carry the field
    pub default: Option<FieldValue>,
}

impl FieldSpec {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            default: None,
        }
    }

    pub fn flag(name: impl Into<String>, default: bool) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            default: Some(FieldValue::Flag(default)),
        }
    }

    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn default_text(mut self, value: Option<String>) -> Self {
        self.default = value.map(FieldValue::Text);
        self
    }

    /// First failing rule, rules are checked in registration order
    pub fn validate(&self, value: Option<&FieldValue>) -> Option<FieldError> {
        self.rules.iter().find_map(|rule| rule.check(value).err())
    }
}

/// The registered fields of one form
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn validate_field(
        &self,
        name: &str,
        values: &BTreeMap<String, FieldValue>,
    ) -> Option<FieldError> {
        self.field(name)
            .and_then(|spec| spec.validate(values.get(name)))
    }

    pub fn validate(&self, values: &BTreeMap<String, FieldValue>) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for spec in &self.fields {
            errors.set(&spec.name, spec.validate(values.get(&spec.name)));
        }
        errors
    }
}

use std::collections::{BTreeMap, BTreeSet};

use super::rules::{FormSchema, ValidationErrors};

/// Current value of one field. Toggles hold a real `bool`; the text encoding
/// only exists at the boundary to the REST representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

/// Interaction applied to [`FormState`]
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Replace every value, dropping edits, errors and touched marks
    Seed(BTreeMap<String, FieldValue>),
    SetText { field: String, value: String },
    SetFlag { field: String, value: bool },
    ToggleFlag { field: String },
    /// Validate every registered field and keep revalidating on change
    SubmitAttempted,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
    errors: ValidationErrors,
    touched: BTreeSet<String>,
    submit_attempted: bool,
}

impl FormState {
    pub fn apply(&mut self, action: FormAction, schema: &FormSchema) {
        match action {
            FormAction::Seed(values) => {
                self.values = values;
                self.errors.clear();
                self.touched.clear();
                self.submit_attempted = false;
            }
            FormAction::SetText { field, value } => {
                self.values.insert(field.clone(), FieldValue::Text(value));
                self.after_change(field, schema);
            }
            FormAction::SetFlag { field, value } => {
                self.values.insert(field.clone(), FieldValue::Flag(value));
                self.after_change(field, schema);
            }
            FormAction::ToggleFlag { field } => {
                let current = self
                    .flag(&field)
                    .or_else(|| {
                        schema
                            .field(&field)
                            .and_then(|spec| spec.default.as_ref())
                            .and_then(FieldValue::as_flag)
                    })
                    .unwrap_or(false);
                self.values.insert(field.clone(), FieldValue::Flag(!current));
                self.after_change(field, schema);
            }
            FormAction::SubmitAttempted => {
                self.submit_attempted = true;
                self.errors = schema.validate(&self.values);
            }
        }
    }

    fn after_change(&mut self, field: String, schema: &FormSchema) {
        let error = schema.validate_field(&field, &self.values);
        self.errors.set(&field, error);
        self.touched.insert(field);
    }

    /// Text value, empty when unset
    pub fn text(&self, field: &str) -> String {
        self.values
            .get(field)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
            .to_string()
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        self.values.get(field).and_then(FieldValue::as_flag)
    }

    pub fn values(&self) -> &BTreeMap<String, FieldValue> {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn is_dirty(&self) -> bool {
        !self.touched.is_empty()
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }
}

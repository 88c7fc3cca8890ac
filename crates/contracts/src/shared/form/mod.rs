//! Field-level form state shared by the console's details screens.
//!
//! - `state.rs`: values, errors and the reducer that moves between them
//! - `rules.rs`: per-field validation rules and the schema that groups them
//! - `flatten.rs`: dotted field names for nested string maps

pub mod flatten;
pub mod rules;
pub mod state;

pub use rules::{FieldError, FieldRule, FieldSpec, FormSchema, ValidationErrors};
pub use state::{FieldValue, FormAction, FormState};

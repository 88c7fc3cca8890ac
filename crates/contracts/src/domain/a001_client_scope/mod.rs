pub mod aggregate;
pub mod attributes;
pub mod form;

pub use aggregate::ClientScope;
pub use attributes::ClientScopeAttributes;
pub use form::{FormMode, ScopeForm, SubmitOutcome};

//! Client Scope Details UI Module
//!
//! MVVM split as elsewhere in the console:
//! - view_model.rs: signal wrapper around the form controller, commands
//! - view.rs: the form itself (pure UI)
//! - page.rs: host page that supplies the record and the save callback

mod page;
mod view;
mod view_model;

pub use page::ClientScopeDetailsPage;
pub use view::ScopeForm;
pub use view_model::ScopeFormVm;

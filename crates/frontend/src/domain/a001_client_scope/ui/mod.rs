pub mod details;
pub mod list;

pub use details::{ClientScopeDetailsPage, ScopeForm};
pub use list::ClientScopeList;

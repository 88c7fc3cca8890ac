pub mod checkbox;
pub mod form_group;
pub mod help_item;
pub mod input;
pub mod page_header;
pub mod select;

pub use checkbox::Switch;
pub use form_group::FormGroup;
pub use help_item::HelpItem;
pub use input::TextInput;
pub use page_header::PageHeader;
pub use select::Select;

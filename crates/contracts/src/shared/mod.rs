pub mod form;
pub mod navigation;
pub mod select_toggle;

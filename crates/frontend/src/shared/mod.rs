pub mod components;
pub mod config;
pub mod i18n;
pub mod icons;
pub mod list_utils;
pub mod navigation;
pub mod providers;

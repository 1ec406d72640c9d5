pub mod api;
pub mod config;
pub mod error;
pub mod history;
pub mod i18n;
pub mod models;
pub mod money;
pub mod render;
pub mod smart_data;
pub mod totals;

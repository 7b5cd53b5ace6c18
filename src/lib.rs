pub mod config;
pub mod links;
pub mod logging;
pub mod settings;
pub mod ui;

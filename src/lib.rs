pub mod clipboard;
pub mod config;
pub mod logging;
pub mod reply;
pub mod ui;

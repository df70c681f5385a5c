// Library target holding the quiz engine and terminal UI; main.rs only wires
// the terminal, CLI and logging around it.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod event;
pub mod quiz;
pub mod store;
pub mod ui;

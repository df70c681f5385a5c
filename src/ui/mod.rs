pub mod components;
pub mod layout;
pub mod quiz_view;
pub mod screens;
pub mod theme;

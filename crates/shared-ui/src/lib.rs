//! Styled Dioxus components shared by the console pages.

pub mod components;

pub use components::*;

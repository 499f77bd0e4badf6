//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to define common UI elements like buttons, forms, and toasts.
pub mod empty_state;
pub mod header;
pub mod pico;
pub mod require_login;
pub mod toast;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render directory chrome and read the theme from the Leptos
//! context provided by `App`.

pub mod confirm_dialog;
pub mod nav_bar;
pub mod user_card;

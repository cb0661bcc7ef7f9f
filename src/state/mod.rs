//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `overrides`, `profile`, `users`) and
//! kept free of Leptos types so it can be unit tested natively. Pages wrap
//! these models in signals.

pub mod overrides;
pub mod profile;
pub mod theme;
pub mod users;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, event
//! handling) and delegates rendering details to `components`.

pub mod user_list;
pub mod user_profile;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (`localStorage`, the document
//! root) from page and state logic to improve reuse and testability.

pub mod dark_mode;
pub mod storage;

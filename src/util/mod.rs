//! Utility helpers shared across studio UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod dark_mode;
pub mod download;
pub mod notify;

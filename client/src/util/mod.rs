//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting and routing concerns from page and
//! component logic to improve reuse and testability.

pub mod format;
pub mod mount;
pub mod route;

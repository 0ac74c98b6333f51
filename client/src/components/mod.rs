//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, notices) and repeated cards
//! while reading/writing shared state from Leptos context providers.

pub mod listing_card;
pub mod navbar;
pub mod notice_banner;
pub mod stat_card;

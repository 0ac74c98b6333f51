//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split per view unit (`catalog`, `booking`, `registration`,
//! `dashboard`, `draft`) plus app-wide `session` and `ui`. Models are plain
//! structs; pages wrap them in `RwSignal` and call their methods from event
//! handlers.

pub mod booking;
pub mod catalog;
pub mod dashboard;
pub mod draft;
pub mod registration;
pub mod session;
pub mod submission;
pub mod ui;

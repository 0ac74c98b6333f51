//! Outbound request layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the only place pages go to submit something. It currently
//! simulates acceptance; see its module docs.

pub mod api;

//! Mock marketplace data and the record types it is built from.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend yet. Pages read fixtures directly and keep their own
//! copies in local state.

pub mod fixtures;
pub mod types;

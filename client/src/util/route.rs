//! Route parameter resolution for listing detail pages.
//!
//! An unknown or malformed id is reported as not found; there is no fallback
//! record.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::data::fixtures;
use crate::data::types::ListingDetail;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("\"{0}\" no es un identificador de experiencia válido.")]
    InvalidId(String),
    #[error("No encontramos la experiencia {0}.")]
    NotFound(u32),
}

/// Parse the `{id}` path segment.
pub fn parse_listing_id(raw: &str) -> Result<u32, RouteError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| RouteError::InvalidId(raw.to_owned()))
}

/// Resolve the `{id}` path segment to a detail record.
pub fn resolve_listing(raw: &str) -> Result<ListingDetail, RouteError> {
    let id = parse_listing_id(raw)?;
    fixtures::listing_detail(id).ok_or(RouteError::NotFound(id))
}

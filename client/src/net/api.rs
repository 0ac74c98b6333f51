//! Submission endpoints for bookings, registrations and listings.
//!
//! There is no backend yet: every call waits a fixed delay in the browser and
//! then accepts the request. Server-side (SSR) and native test builds skip the
//! delay. Callers still get a `Result` so a real transport can slot in without
//! touching the pages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use uuid::Uuid;

use crate::state::booking::BookingRequest;
use crate::state::draft::ListingSubmission;
use crate::state::registration::Registration;

/// How long a simulated submission takes in the browser.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("No hay conexión con el servidor.")]
    Unavailable,
    #[error("La solicitud fue rechazada: {0}")]
    Rejected(String),
}

/// Acknowledgement for an accepted request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub request_id: Uuid,
}

/// One-line description of an outgoing request for the browser console.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn request_line(kind: &str, request_id: Uuid, payload: &impl std::fmt::Debug) -> String {
    format!("{kind} {request_id} sent: {payload:?}")
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
async fn simulate<P: std::fmt::Debug>(kind: &'static str, request_id: Uuid, payload: &P) -> Result<Receipt, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("{}", request_line(kind, request_id, payload));
        gloo_timers::future::sleep(SUBMIT_DELAY).await;
        log::info!("{kind} {request_id} accepted");
    }
    Ok(Receipt { request_id })
}

/// Request a reservation.
pub async fn submit_booking(request_id: Uuid, request: &BookingRequest) -> Result<Receipt, ApiError> {
    simulate("booking", request_id, request).await
}

/// Create an account.
pub async fn register_account(request_id: Uuid, registration: &Registration) -> Result<Receipt, ApiError> {
    simulate("registration", request_id, registration).await
}

/// Send a listing draft to moderation.
pub async fn publish_listing(request_id: Uuid, listing: &ListingSubmission) -> Result<Receipt, ApiError> {
    simulate("publish", request_id, listing).await
}

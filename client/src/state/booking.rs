//! Booking composer for the listing detail page.
//!
//! DESIGN
//! ======
//! The composer owns date choice, participant count and the submission
//! lifecycle. Validation happens before `begin()` so a rejected submit never
//! enters the busy state.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use chrono::NaiveDate;
use serde::Serialize;

use super::submission::SubmissionState;
use crate::data::types::ListingDetail;

/// Participant count a fresh composer starts with.
pub const DEFAULT_PARTICIPANTS: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Por favor selecciona una fecha para tu experiencia.")]
    MissingDate,
    #[error("La fecha seleccionada no está disponible.")]
    UnavailableDate,
    #[error("Ya hay una solicitud de reserva en curso.")]
    AlreadySubmitting,
}

impl BookingError {
    /// Headline for the notice banner.
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingDate => "Fecha requerida",
            Self::UnavailableDate => "Fecha no disponible",
            Self::AlreadySubmitting => "Reserva en curso",
        }
    }
}

/// What gets sent when a booking is requested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub listing_id: u32,
    pub date: NaiveDate,
    pub participants: u32,
    pub total: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingComposer {
    pub listing_id: u32,
    pub price: u32,
    pub max_people: u32,
    pub availability: Vec<NaiveDate>,
    pub selected_date: Option<NaiveDate>,
    pub participants: u32,
    pub submission: SubmissionState,
}

impl BookingComposer {
    pub fn new(listing_id: u32, price: u32, max_people: u32, availability: Vec<NaiveDate>) -> Self {
        let max_people = max_people.max(1);
        Self {
            listing_id,
            price,
            max_people,
            availability,
            selected_date: None,
            participants: DEFAULT_PARTICIPANTS.min(max_people),
            submission: SubmissionState::default(),
        }
    }

    pub fn for_listing(detail: &ListingDetail) -> Self {
        Self::new(detail.listing.id, detail.listing.price, detail.listing.max_people, detail.availability.clone())
    }

    /// Choose a date. Only dates from the availability list are accepted.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        if !self.availability.contains(&date) {
            return Err(BookingError::UnavailableDate);
        }
        self.selected_date = Some(date);
        Ok(())
    }

    /// Select from the raw `<select>` value; an empty value clears the choice.
    pub fn select_date_str(&mut self, raw: &str) -> Result<(), BookingError> {
        if raw.is_empty() {
            self.selected_date = None;
            return Ok(());
        }
        let date = raw
            .parse::<NaiveDate>()
            .map_err(|_| BookingError::UnavailableDate)?;
        self.select_date(date)
    }

    pub fn can_decrement(&self) -> bool {
        self.participants > 1
    }

    pub fn can_increment(&self) -> bool {
        self.participants < self.max_people
    }

    /// One fewer participant; a no-op at 1.
    pub fn decrement(&mut self) {
        if self.can_decrement() {
            self.participants -= 1;
        }
    }

    /// One more participant; a no-op at `max_people`.
    pub fn increment(&mut self) {
        if self.can_increment() {
            self.participants += 1;
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.participants)
    }

    pub fn is_busy(&self) -> bool {
        self.submission.is_busy()
    }

    /// Validate and build the request without touching any state.
    pub fn request(&self) -> Result<BookingRequest, BookingError> {
        let date = self.selected_date.ok_or(BookingError::MissingDate)?;
        Ok(BookingRequest { listing_id: self.listing_id, date, participants: self.participants, total: self.total() })
    }

    /// Validate, then enter the busy state. Returns the request and its id.
    pub fn submit(&mut self) -> Result<(uuid::Uuid, BookingRequest), BookingError> {
        if self.is_busy() {
            return Err(BookingError::AlreadySubmitting);
        }
        let request = self.request()?;
        let request_id = self.submission.begin().ok_or(BookingError::AlreadySubmitting)?;
        Ok((request_id, request))
    }

    /// Apply the outcome of the pending booking request; stale ids are ignored.
    pub fn complete<E: std::fmt::Display>(&mut self, request_id: uuid::Uuid, outcome: &Result<(), E>) -> bool {
        self.submission.finish(request_id, outcome)
    }
}

//! Draft composer for publishing a new listing.
//!
//! The highlight list never drops below one entry; the removal guard lives in
//! the mutation itself, not only in the view.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::Serialize;

use super::submission::SubmissionState;
use crate::data::types::Category;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("El campo \"{0}\" es obligatorio.")]
    MissingField(&'static str),
    #[error("El precio debe ser un número entero mayor que cero.")]
    InvalidPrice,
    #[error("El máximo de personas debe ser un número entero mayor que cero.")]
    InvalidMaxPeople,
    #[error("Selecciona una categoría.")]
    MissingCategory,
    #[error("Ya hay una publicación en curso.")]
    AlreadySubmitting,
}

/// Text inputs of the publish form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Location,
    Price,
    Duration,
    MaxPeople,
}

impl DraftField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Título de la experiencia",
            Self::Description => "Descripción",
            Self::Location => "Ubicación",
            Self::Price => "Precio por persona (COP)",
            Self::Duration => "Duración",
            Self::MaxPeople => "Máximo de personas",
        }
    }
}

/// A listing ready to be sent for moderation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListingSubmission {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: u32,
    pub duration: String,
    pub max_people: u32,
    pub category: Category,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftListing {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: String,
    pub duration: String,
    pub max_people: String,
    pub category: Option<Category>,
    pub highlights: Vec<String>,
    /// Upload slots; kept for shape only.
    pub images: Vec<String>,
    pub submission: SubmissionState,
}

impl Default for DraftListing {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            price: String::new(),
            duration: String::new(),
            max_people: String::new(),
            category: None,
            highlights: vec![String::new()],
            images: Vec::new(),
            submission: SubmissionState::default(),
        }
    }
}

impl DraftListing {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Location => &self.location,
            DraftField::Price => &self.price,
            DraftField::Duration => &self.duration,
            DraftField::MaxPeople => &self.max_people,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
            DraftField::Location => &mut self.location,
            DraftField::Price => &mut self.price,
            DraftField::Duration => &mut self.duration,
            DraftField::MaxPeople => &mut self.max_people,
        };
        *slot = value;
    }

    /// Set the category from the `<select>` value; empty clears it.
    pub fn set_category_str(&mut self, raw: &str) {
        self.category = Category::parse(raw);
    }

    /// Append one empty highlight.
    pub fn add_highlight(&mut self) {
        self.highlights.push(String::new());
    }

    /// Replace the highlight at `index`. Out-of-range indexes are ignored.
    pub fn update_highlight(&mut self, index: usize, value: String) -> bool {
        match self.highlights.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn can_remove_highlight(&self) -> bool {
        self.highlights.len() > 1
    }

    /// Remove the highlight at `index`, unless it is the last one left.
    pub fn remove_highlight(&mut self, index: usize) -> bool {
        if !self.can_remove_highlight() || index >= self.highlights.len() {
            return false;
        }
        self.highlights.remove(index);
        true
    }

    /// Back to the empty shape, keeping the submission record.
    pub fn reset(&mut self) {
        let submission = std::mem::take(&mut self.submission);
        *self = Self { submission, ..Self::default() };
    }

    /// Check required inputs and parse the numeric ones.
    ///
    /// Blank highlights are dropped from the payload.
    pub fn validate(&self) -> Result<ListingSubmission, DraftError> {
        for field in [DraftField::Title, DraftField::Description, DraftField::Location] {
            if self.field(field).trim().is_empty() {
                return Err(DraftError::MissingField(field.label()));
            }
        }
        let price = parse_positive(&self.price).ok_or(DraftError::InvalidPrice)?;
        if self.duration.trim().is_empty() {
            return Err(DraftError::MissingField(DraftField::Duration.label()));
        }
        let max_people = parse_positive(&self.max_people).ok_or(DraftError::InvalidMaxPeople)?;
        let category = self.category.ok_or(DraftError::MissingCategory)?;

        Ok(ListingSubmission {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            location: self.location.trim().to_owned(),
            price,
            duration: self.duration.trim().to_owned(),
            max_people,
            category,
            highlights: self
                .highlights
                .iter()
                .map(|h| h.trim())
                .filter(|h| !h.is_empty())
                .map(str::to_owned)
                .collect(),
        })
    }

    /// Validate, then enter the busy state.
    pub fn submit(&mut self) -> Result<(uuid::Uuid, ListingSubmission), DraftError> {
        if self.submission.is_busy() {
            return Err(DraftError::AlreadySubmitting);
        }
        let listing = self.validate()?;
        let request_id = self.submission.begin().ok_or(DraftError::AlreadySubmitting)?;
        Ok((request_id, listing))
    }

    /// Apply the outcome of a publish request.
    ///
    /// Only the pending request counts; a success clears the form. Returns
    /// whether the outcome was applied.
    pub fn complete<E: std::fmt::Display>(&mut self, request_id: uuid::Uuid, outcome: &Result<(), E>) -> bool {
        if !self.submission.finish(request_id, outcome) {
            return false;
        }
        if outcome.is_ok() {
            self.reset();
        }
        true
    }
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

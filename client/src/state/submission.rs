//! Request lifecycle for form submissions.
//!
//! DESIGN
//! ======
//! Each submit is keyed by a request id. A failed request keeps its id so a
//! retry is idempotent on the receiving side; a new id is only minted once the
//! previous request has succeeded or been cancelled.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending {
        request_id: Uuid,
    },
    Succeeded {
        request_id: Uuid,
    },
    Failed {
        request_id: Uuid,
        message: String,
    },
}

impl SubmissionState {
    /// Enter `Pending`. Returns `None` if a request is already in flight.
    pub fn begin(&mut self) -> Option<Uuid> {
        let request_id = match self {
            Self::Pending { .. } => return None,
            Self::Failed { request_id, .. } => *request_id,
            Self::Idle | Self::Succeeded { .. } => Uuid::new_v4(),
        };
        *self = Self::Pending { request_id };
        Some(request_id)
    }

    /// Record the outcome of `request_id`. Stale completions are ignored and
    /// reported as `false`.
    pub fn finish<E: std::fmt::Display>(&mut self, request_id: Uuid, outcome: &Result<(), E>) -> bool {
        if self.pending_id() != Some(request_id) {
            return false;
        }
        *self = match outcome {
            Ok(()) => Self::Succeeded { request_id },
            Err(e) => Self::Failed { request_id, message: e.to_string() },
        };
        true
    }

    /// Drop an in-flight request; its completion will be ignored.
    pub fn cancel(&mut self) {
        if self.is_busy() {
            *self = Self::Idle;
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn pending_id(&self) -> Option<Uuid> {
        match self {
            Self::Pending { request_id } => Some(*request_id),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

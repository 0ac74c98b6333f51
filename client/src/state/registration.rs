//! Account registration form.
//!
//! DESIGN
//! ======
//! Tourist and provider share one field set; only `organization` depends on
//! the mode and it is never required. Switching mode keeps every field.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use serde::Serialize;

use super::submission::SubmissionState;
use crate::data::types::AccountType;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("Las contraseñas no coinciden.")]
    PasswordMismatch,
    #[error("La contraseña debe tener al menos 6 caracteres.")]
    PasswordTooShort,
    #[error("El campo \"{0}\" es obligatorio.")]
    MissingField(&'static str),
    #[error("Debes aceptar los términos y condiciones.")]
    TermsNotAccepted,
    #[error("Ya hay un registro en curso.")]
    AlreadySubmitting,
}

/// Input ids, one per controlled field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Location,
    Organization,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nombre completo",
            Self::Email => "Correo electrónico",
            Self::Phone => "Teléfono",
            Self::Location => "Ubicación",
            Self::Organization => "Organización o comunidad",
            Self::Password => "Contraseña",
            Self::ConfirmPassword => "Confirmar contraseña",
        }
    }
}

/// Validated registration payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub account_type: AccountType,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub organization: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub account_type: AccountType,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub organization: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub submission: SubmissionState,
}

impl RegistrationForm {
    pub fn new(account_type: AccountType) -> Self {
        Self { account_type, ..Self::default() }
    }

    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.account_type = account_type;
    }

    pub fn shows_organization(&self) -> bool {
        self.account_type == AccountType::Provider
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Location => &self.location,
            Field::Organization => &self.organization,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Location => &mut self.location,
            Field::Organization => &mut self.organization,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }

    /// Run the pre-submit checks in order; the first failure wins.
    ///
    /// Password equality is checked before length, then required fields and
    /// the terms checkbox.
    pub fn validate(&self) -> Result<Registration, RegistrationError> {
        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegistrationError::PasswordTooShort);
        }
        for field in [Field::Name, Field::Email, Field::Phone, Field::Location] {
            if self.field(field).trim().is_empty() {
                return Err(RegistrationError::MissingField(field.label()));
            }
        }
        if !self.accepted_terms {
            return Err(RegistrationError::TermsNotAccepted);
        }

        let organization = match self.account_type {
            AccountType::Provider => Some(self.organization.trim())
                .filter(|o| !o.is_empty())
                .map(str::to_owned),
            AccountType::Tourist => None,
        };
        Ok(Registration {
            account_type: self.account_type,
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            location: self.location.trim().to_owned(),
            organization,
        })
    }

    /// Validate, then enter the busy state.
    pub fn submit(&mut self) -> Result<(uuid::Uuid, Registration), RegistrationError> {
        if self.submission.is_busy() {
            return Err(RegistrationError::AlreadySubmitting);
        }
        let registration = self.validate()?;
        let request_id = self.submission.begin().ok_or(RegistrationError::AlreadySubmitting)?;
        Ok((request_id, registration))
    }
}

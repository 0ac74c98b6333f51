use super::*;

fn filled(account_type: AccountType) -> RegistrationForm {
    let mut form = RegistrationForm::new(account_type);
    form.set_field(Field::Name, "Luz Mery Quintero".to_owned());
    form.set_field(Field::Email, "luz@example.com".to_owned());
    form.set_field(Field::Phone, "+57 300 000 0000".to_owned());
    form.set_field(Field::Location, "Mocoa, Putumayo".to_owned());
    form.set_field(Field::Password, "secreto1".to_owned());
    form.set_field(Field::ConfirmPassword, "secreto1".to_owned());
    form.accepted_terms = true;
    form
}

// =============================================================
// Account type
// =============================================================

#[test]
fn organization_only_shown_for_provider() {
    let mut form = RegistrationForm::default();
    assert!(!form.shows_organization());
    form.set_account_type(AccountType::Provider);
    assert!(form.shows_organization());
}

#[test]
fn switching_type_preserves_shared_fields() {
    let mut form = filled(AccountType::Tourist);
    form.set_account_type(AccountType::Provider);
    form.set_field(Field::Organization, "Mujeres Tejedoras Inga".to_owned());
    form.set_account_type(AccountType::Tourist);
    assert_eq!(form.name, "Luz Mery Quintero");
    assert_eq!(form.email, "luz@example.com");
    assert_eq!(form.organization, "Mujeres Tejedoras Inga");
}

// =============================================================
// Password checks
// =============================================================

#[test]
fn five_char_password_with_matching_confirm_is_too_short() {
    let mut form = filled(AccountType::Tourist);
    form.set_field(Field::Password, "abc12".to_owned());
    form.set_field(Field::ConfirmPassword, "abc12".to_owned());
    assert_eq!(form.validate(), Err(RegistrationError::PasswordTooShort));
}

#[test]
fn five_char_password_is_rejected_for_any_confirm_value() {
    for confirm in ["", "abc12", "abc123", "zzzzzzzz"] {
        let mut form = filled(AccountType::Tourist);
        form.set_field(Field::Password, "abc12".to_owned());
        form.set_field(Field::ConfirmPassword, confirm.to_owned());
        assert!(form.validate().is_err(), "confirm={confirm:?}");
    }
}

#[test]
fn mismatch_is_reported_before_length() {
    let mut form = filled(AccountType::Tourist);
    form.set_field(Field::Password, "abcdef".to_owned());
    form.set_field(Field::ConfirmPassword, "abcdeg".to_owned());
    assert_eq!(form.validate(), Err(RegistrationError::PasswordMismatch));

    form.set_field(Field::Password, "abc".to_owned());
    form.set_field(Field::ConfirmPassword, "abd".to_owned());
    assert_eq!(form.validate(), Err(RegistrationError::PasswordMismatch));
}

#[test]
fn password_length_counts_characters_not_bytes() {
    let mut form = filled(AccountType::Tourist);
    form.set_field(Field::Password, "ñññññ".to_owned());
    form.set_field(Field::ConfirmPassword, "ñññññ".to_owned());
    assert_eq!(form.validate(), Err(RegistrationError::PasswordTooShort));
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn blank_required_field_is_reported() {
    let mut form = filled(AccountType::Tourist);
    form.set_field(Field::Phone, "   ".to_owned());
    assert_eq!(form.validate(), Err(RegistrationError::MissingField("Teléfono")));
}

#[test]
fn terms_must_be_accepted() {
    let mut form = filled(AccountType::Tourist);
    form.accepted_terms = false;
    assert_eq!(form.validate(), Err(RegistrationError::TermsNotAccepted));
}

#[test]
fn provider_without_organization_is_valid() {
    let form = filled(AccountType::Provider);
    let registration = form.validate().unwrap();
    assert_eq!(registration.account_type, AccountType::Provider);
    assert_eq!(registration.organization, None);
}

#[test]
fn tourist_drops_organization_value() {
    let mut form = filled(AccountType::Tourist);
    form.set_field(Field::Organization, "Comunidad Cofán".to_owned());
    assert_eq!(form.validate().unwrap().organization, None);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn failed_validation_does_not_enter_busy_state() {
    let mut form = filled(AccountType::Tourist);
    form.set_field(Field::ConfirmPassword, "otra-clave".to_owned());
    assert_eq!(form.submit().map(|(_, r)| r), Err(RegistrationError::PasswordMismatch));
    assert!(!form.submission.is_busy());
}

#[test]
fn valid_submit_enters_busy_state_once() {
    let mut form = filled(AccountType::Provider);
    let (_, registration) = form.submit().unwrap();
    assert_eq!(registration.name, "Luz Mery Quintero");
    assert!(form.submission.is_busy());
    assert_eq!(form.submit().map(|(_, r)| r), Err(RegistrationError::AlreadySubmitting));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(RegistrationError::PasswordMismatch.to_string(), "Las contraseñas no coinciden.");
    assert_eq!(
        RegistrationError::PasswordTooShort.to_string(),
        "La contraseña debe tener al menos 6 caracteres."
    );
}

use super::*;

fn user() -> SessionUser {
    SessionUser {
        name: "Taita Andrés".to_owned(),
        email: "andres@example.com".to_owned(),
        account_type: AccountType::Provider,
        organization: Some("Taitas del Putumayo".to_owned()),
    }
}

#[test]
fn session_default_is_signed_out() {
    let session = Session::default();
    assert!(!session.is_signed_in());
    assert!(session.user.is_none());
}

#[test]
fn sign_in_then_sign_out() {
    let mut session = Session::default();
    session.sign_in(user());
    assert!(session.is_signed_in());
    assert_eq!(session.user.as_ref().map(|u| u.account_type), Some(AccountType::Provider));
    session.sign_out();
    assert_eq!(session, Session::default());
}

#[test]
fn sign_out_when_signed_out_is_harmless() {
    let mut session = Session::default();
    session.sign_out();
    assert!(!session.is_signed_in());
}

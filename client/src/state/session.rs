#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::data::types::AccountType;

/// The signed-in account as the rest of the app sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
    pub organization: Option<String>,
}

/// App-wide session, provided through context.
///
/// Issued by `sign_in` after a successful registration and cleared by
/// `sign_out`. Views that gate on presence read `user`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn sign_in(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

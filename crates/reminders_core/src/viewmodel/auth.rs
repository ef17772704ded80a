//! Sign-in state as seen by the reminders screens.

/// Authentication state derived from the platform auth session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationState {
    Authenticated,
    Unauthenticated,
    InvalidAuthentication,
}

impl AuthenticationState {
    /// Maps the current signed-in user (if any) to a state.
    pub fn from_user<U>(user: Option<&U>) -> Self {
        match user {
            Some(_) => Self::Authenticated,
            None => Self::Unauthenticated,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

//! Session state: who the store is acting for.

use core::fmt;

use cartwheel_core::Email;

use crate::keys::Scope;

/// An opaque access token issued by the commerce backend.
///
/// The store persists it verbatim and never inspects it. `Debug` output is
/// redacted so tokens cannot leak through logs; read the value explicitly
/// with [`SessionToken::as_str`] where it is actually needed.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a backend-issued token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token value, for handing back to the backend or to storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// The logged-in customer: an access token and the email it was issued for.
///
/// Constructing one requires both halves, so a token without an email is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Access token for the commerce backend.
    pub token: SessionToken,
    /// The email the customer logged in with; names their storage scope.
    pub email: Email,
}

/// Whether a customer is logged in, and as whom.
///
/// Defaults to [`Session::Guest`]; every store starts there until a login
/// is observed or restored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No user identity present.
    #[default]
    Guest,
    /// A customer is logged in.
    LoggedIn(UserIdentity),
}

impl Session {
    /// Build a logged-in session from a token/email pair.
    #[must_use]
    pub fn logged_in(token: SessionToken, email: Email) -> Self {
        Self::LoggedIn(UserIdentity { token, email })
    }

    /// Whether a customer is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    /// The logged-in identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&UserIdentity> {
        match self {
            Self::Guest => None,
            Self::LoggedIn(identity) => Some(identity),
        }
    }

    /// The logged-in email, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        match self {
            Self::Guest => None,
            Self::LoggedIn(identity) => Some(&identity.email),
        }
    }

    /// The storage scope this session's collections live under.
    #[must_use]
    pub fn scope(&self) -> Scope {
        match self {
            Self::Guest => Scope::Guest,
            Self::LoggedIn(identity) => Scope::User(identity.email.clone()),
        }
    }
}

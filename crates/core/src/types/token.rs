//! Bearer credential type.
//!
//! The backend issues an opaque token at login; the client attaches it to
//! every authenticated request and persists it verbatim between sessions.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an [`AuthToken`] from an empty string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("auth token cannot be empty")]
pub struct AuthTokenError;

/// An opaque bearer credential.
///
/// The only structural invariant is non-emptiness: a present principal
/// always carries a usable token. The token contents are never inspected
/// by the client.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a token string.
    ///
    /// # Errors
    ///
    /// Returns [`AuthTokenError`] if the string is empty.
    pub fn parse(s: impl Into<String>) -> Result<Self, AuthTokenError> {
        let s = s.into();
        if s.is_empty() {
            return Err(AuthTokenError);
        }
        Ok(Self(s))
    }

    /// The raw token, for the `Authorization: Bearer` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Keep tokens out of logs; Debug shows only the length.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(len={})", self.0.len())
    }
}

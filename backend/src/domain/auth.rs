//! Authentication primitives: verified identity claims and registration
//! credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::{PASSWORD_MIN, UserId, UserValidationError, Username};

/// Scheme prefix expected in the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Identity decoded from a verified bearer credential.
///
/// Lives for a single request and is never persisted. Every mutating
/// operation receives it as an explicit argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthClaim {
    user_id: UserId,
    username: String,
}

impl AuthClaim {
    /// Build a claim for a verified identity.
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    /// Verified identity.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Username recorded in the credential. Informational only; ownership
    /// decisions compare identities.
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Extract the bearer token from an `Authorization` header value.
///
/// A missing header, a different scheme, or an empty token all mean "no
/// credential" rather than an error, so anonymous reads keep working.
///
/// # Examples
/// ```
/// use bloglist::domain::bearer_token;
///
/// assert_eq!(bearer_token(Some("Bearer abc.def")), Some("abc.def"));
/// assert_eq!(bearer_token(Some("Basic dXNlcg==")), None);
/// assert_eq!(bearer_token(None), None);
/// ```
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Validated registration input.
///
/// ## Invariants
/// - `username` satisfies [`Username`] rules.
/// - `password` is at least [`PASSWORD_MIN`] characters and is zeroised on
///   drop.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationCredentials {
    username: Username,
    name: Option<String>,
    password: Zeroizing<String>,
}

impl fmt::Debug for RegistrationCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationCredentials")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl RegistrationCredentials {
    /// Validate raw registration fields.
    pub fn try_from_parts(
        username: &str,
        name: Option<String>,
        password: &str,
    ) -> Result<Self, UserValidationError> {
        let username = Username::new(username)?;
        if password.chars().count() < PASSWORD_MIN {
            return Err(UserValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        Ok(Self {
            username,
            name,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Validated, trimmed username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Optional display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Plaintext password, only to be handed to a password hasher.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

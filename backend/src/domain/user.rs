//! User data model.
//!
//! A user owns nothing by reference: the `blogs` list is a back-reference
//! set kept for query convenience, maintained by the blog service alongside
//! the blog store.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::BlogId;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Id is empty.
    EmptyId,
    /// Id is not a UUID.
    InvalidId,
    /// Trimmed username is shorter than `min` characters.
    UsernameTooShort { min: usize },
    /// Password is shorter than `min` characters.
    PasswordTooShort { min: usize },
}

impl UserValidationError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId | Self::InvalidId => "id",
            Self::UsernameTooShort { .. } => "username",
            Self::PasswordTooShort { .. } => "password",
        }
    }

    /// Stable machine-readable code for error details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyId => "empty_id",
            Self::InvalidId => "invalid_id",
            Self::UsernameTooShort { .. } => "username_too_short",
            Self::PasswordTooShort { .. } => "password_too_short",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::UsernameTooShort { min } => {
                write!(f, "username must be at least {min} characters long")
            }
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters long")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from textual input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;
/// Minimum allowed length for a plaintext password at registration.
pub const PASSWORD_MIN: usize = 3;

/// Unique login name.
///
/// ## Invariants
/// - Trimmed, and at least [`USERNAME_MIN`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`], trimming surrounding whitespace.
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = username.as_ref().trim();
        if trimmed.chars().count() < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque password credential produced by a password hasher.
///
/// Deliberately neither `Serialize` nor `Display`, and redacted in `Debug`,
/// so it cannot leak into responses or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a hasher adapter.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash for verification by the hasher adapter.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Registered application user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    name: Option<String>,
    password_hash: PasswordHash,
    blogs: Vec<BlogId>,
}

impl User {
    /// Build a freshly registered user with no blogs.
    ///
    /// A blank display name is stored as `None`.
    pub fn new(
        id: UserId,
        username: Username,
        name: Option<String>,
        password_hash: PasswordHash,
    ) -> Self {
        let name = name
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        Self {
            id,
            username,
            name,
            password_hash,
            blogs: Vec::new(),
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique login name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Optional display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Stored password credential.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Ids of the blog entries this user created, in creation order.
    pub fn blogs(&self) -> &[BlogId] {
        &self.blogs
    }

    /// Record a back-reference to `blog_id`; no-op when already present.
    pub fn add_blog(&mut self, blog_id: BlogId) {
        if !self.blogs.contains(&blog_id) {
            self.blogs.push(blog_id);
        }
    }

    /// Drop the back-reference to `blog_id`; absence is not an error.
    pub fn remove_blog(&mut self, blog_id: &BlogId) {
        self.blogs.retain(|id| id != blog_id);
    }

    /// Minimal public projection used when expanding blog owners.
    pub fn projection(&self) -> OwnerProjection {
        OwnerProjection {
            id: self.id,
            username: self.username.to_string(),
            name: self.name.clone(),
        }
    }
}

/// Public projection of a user: identity, username, and display name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerProjection {
    /// User id.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: Option<String>,
}

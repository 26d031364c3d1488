//! Driving port for account registration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{BlogId, Error, RegistrationCredentials, User, UserId};

/// Public view of a freshly registered or listed account.
///
/// The password credential is never part of this payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// New user id.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: Option<String>,
    /// Owned entry ids; empty on registration.
    pub blogs: Vec<BlogId>,
}

impl From<&User> for UserAccount {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            name: user.name().map(str::to_owned),
            blogs: user.blogs().to_vec(),
        }
    }
}

/// Domain use-case port for creating accounts.
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Register a new account; `Conflict` when the username is taken.
    async fn register(&self, credentials: RegistrationCredentials) -> Result<UserAccount, Error>;
}

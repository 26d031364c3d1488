//! Account registration and user listing service.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    BlogRepository, BlogSummary, PasswordHasher, UserAccount, UserListing, UserPersistenceError,
    UserRegistration, UserRepository, UsersQuery,
};
use crate::domain::{Error, RegistrationCredentials, User, UserId, UserValidationError};

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::DuplicateUsername { username } => {
            Error::conflict(format!("username `{username}` is already taken")).with_details(
                json!({ "field": "username", "code": "duplicate_username" }),
            )
        }
        other => Error::internal(format!("user directory error: {other}")),
    }
}

/// Translate a registration validation failure into a client error.
pub fn map_user_validation_error(error: UserValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": error.code(),
    }))
}

/// Service implementing [`UserRegistration`] and [`UsersQuery`].
#[derive(Clone)]
pub struct UserRegistrationService<U, B, H> {
    users: Arc<U>,
    blogs: Arc<B>,
    hasher: Arc<H>,
}

impl<U, B, H> UserRegistrationService<U, B, H> {
    /// Create a service over the user directory, blog store, and hasher.
    pub fn new(users: Arc<U>, blogs: Arc<B>, hasher: Arc<H>) -> Self {
        Self {
            users,
            blogs,
            hasher,
        }
    }
}

#[async_trait]
impl<U, B, H> UserRegistration for UserRegistrationService<U, B, H>
where
    U: UserRepository,
    B: BlogRepository,
    H: PasswordHasher,
{
    async fn register(&self, credentials: RegistrationCredentials) -> Result<UserAccount, Error> {
        let password_hash = self
            .hasher
            .hash(credentials.password())
            .await
            .map_err(|err| Error::internal(err.to_string()))?;
        let user = User::new(
            UserId::random(),
            credentials.username().clone(),
            credentials.name().map(str::to_owned),
            password_hash,
        );
        self.users.insert(&user).await.map_err(map_user_error)?;
        debug!(user_id = %user.id(), "registered user");
        Ok(UserAccount::from(&user))
    }
}

#[async_trait]
impl<U, B, H> UsersQuery for UserRegistrationService<U, B, H>
where
    U: UserRepository,
    B: BlogRepository,
    H: PasswordHasher,
{
    async fn list_users(&self) -> Result<Vec<UserListing>, Error> {
        let users = self.users.list().await.map_err(map_user_error)?;
        let entries = self
            .blogs
            .list()
            .await
            .map_err(|err| Error::internal(format!("blog store error: {err}")))?;
        let by_id: HashMap<_, _> = entries
            .iter()
            .map(|entry| (entry.id(), BlogSummary::from(entry)))
            .collect();

        Ok(users
            .iter()
            .map(|user| UserListing {
                id: user.id(),
                username: user.username().to_string(),
                name: user.name().map(str::to_owned),
                // Dangling back-references are skipped.
                blogs: user
                    .blogs()
                    .iter()
                    .filter_map(|id| by_id.get(id).cloned())
                    .collect(),
            })
            .collect())
    }
}

//! Port abstraction for the user directory and its errors.
use async_trait::async_trait;

use crate::domain::{BlogId, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user directory adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the username.
        DuplicateUsername { username: String } => "username already taken: {username}",
    }
}

/// User directory with back-reference maintenance.
///
/// `add_blog` and `remove_blog` are atomic per user record so concurrent
/// writers never lose each other's updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, enforcing username uniqueness.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Every registered user in registration order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Record `blog_id` as owned by `user_id`; `false` when the user is gone.
    async fn add_blog(&self, user_id: &UserId, blog_id: BlogId)
    -> Result<bool, UserPersistenceError>;

    /// Drop `blog_id` from the owner's set; `false` when the user is gone.
    async fn remove_blog(
        &self,
        user_id: &UserId,
        blog_id: &BlogId,
    ) -> Result<bool, UserPersistenceError>;
}

//! In-memory `UserRepository` implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{BlogId, User, UserId};

/// User directory held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|existing| existing.username() == user.username())
        {
            return Err(UserPersistenceError::duplicate_username(
                user.username().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id() == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.users.read().await.clone())
    }

    async fn add_blog(
        &self,
        user_id: &UserId,
        blog_id: BlogId,
    ) -> Result<bool, UserPersistenceError> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|user| user.id() == *user_id) else {
            debug!(user_id = %user_id, blog_id = %blog_id, "owner missing while linking blog");
            return Ok(false);
        };
        user.add_blog(blog_id);
        Ok(true)
    }

    async fn remove_blog(
        &self,
        user_id: &UserId,
        blog_id: &BlogId,
    ) -> Result<bool, UserPersistenceError> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|user| user.id() == *user_id) else {
            return Ok(false);
        };
        user.remove_blog(blog_id);
        Ok(true)
    }
}

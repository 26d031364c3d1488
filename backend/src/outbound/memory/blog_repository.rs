//! In-memory `BlogRepository` implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{BlogRepository, BlogRepositoryError};
use crate::domain::{BlogEntry, BlogId, BlogPatch, CommentText, NewBlog};

/// Blog store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    entries: RwLock<Vec<BlogEntry>>,
}

impl InMemoryBlogRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self) -> Result<Vec<BlogEntry>, BlogRepositoryError> {
        Ok(self.entries.read().await.clone())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<BlogEntry>, BlogRepositoryError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|entry| entry.id() == *id).cloned())
    }

    async fn insert(&self, blog: &NewBlog) -> Result<BlogEntry, BlogRepositoryError> {
        let entry = BlogEntry::from_new(BlogId::random(), blog.clone());
        self.entries.write().await.push(entry.clone());
        debug!(blog_id = %entry.id(), owner = %entry.owner(), "blog inserted");
        Ok(entry)
    }

    async fn update(
        &self,
        id: &BlogId,
        patch: &BlogPatch,
    ) -> Result<Option<BlogEntry>, BlogRepositoryError> {
        let mut entries = self.entries.write().await;
        Ok(entries
            .iter_mut()
            .find(|entry| entry.id() == *id)
            .map(|entry| {
                entry.apply(patch);
                entry.clone()
            }))
    }

    async fn append_comment(
        &self,
        id: &BlogId,
        comment: &CommentText,
    ) -> Result<Option<BlogEntry>, BlogRepositoryError> {
        let mut entries = self.entries.write().await;
        Ok(entries
            .iter_mut()
            .find(|entry| entry.id() == *id)
            .map(|entry| {
                entry.push_comment(comment);
                entry.clone()
            }))
    }

    async fn delete(&self, id: &BlogId) -> Result<bool, BlogRepositoryError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|entry| entry.id() != *id);
        Ok(entries.len() != before)
    }
}

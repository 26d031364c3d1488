//! Port abstraction for the blog store and its errors.

use async_trait::async_trait;

use crate::domain::{BlogEntry, BlogId, BlogPatch, CommentText, NewBlog};

use super::define_port_error;

define_port_error! {
    /// Errors raised by blog store adapters.
    pub enum BlogRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "blog store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "blog store query failed: {message}",
    }
}

/// Document store for blog entries.
///
/// Each mutation is atomic per entry. Methods that target a single entry
/// return `None` (or `false`) when it does not exist rather than failing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Every stored entry in insertion order.
    async fn list(&self) -> Result<Vec<BlogEntry>, BlogRepositoryError>;

    /// Fetch one entry.
    async fn find_by_id(&self, id: &BlogId) -> Result<Option<BlogEntry>, BlogRepositoryError>;

    /// Persist a draft under a freshly generated id.
    async fn insert(&self, blog: &NewBlog) -> Result<BlogEntry, BlogRepositoryError>;

    /// Apply a partial update and return the stored result.
    async fn update(
        &self,
        id: &BlogId,
        patch: &BlogPatch,
    ) -> Result<Option<BlogEntry>, BlogRepositoryError>;

    /// Append a comment and return the stored result.
    async fn append_comment(
        &self,
        id: &BlogId,
        comment: &CommentText,
    ) -> Result<Option<BlogEntry>, BlogRepositoryError>;

    /// Remove an entry; `false` when it was already gone.
    async fn delete(&self, id: &BlogId) -> Result<bool, BlogRepositoryError>;
}

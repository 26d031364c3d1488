//! Driving port for public blog reads.

use async_trait::async_trait;

use crate::domain::{BlogId, BlogStats, BlogView, Error};

/// Domain use-case port for reading blog entries. No credential is needed.
#[async_trait]
pub trait BlogQuery: Send + Sync {
    /// Every entry with its owner expanded.
    async fn list(&self) -> Result<Vec<BlogView>, Error>;

    /// One entry with its owner expanded; `NotFound` when absent.
    async fn get(&self, id: &BlogId) -> Result<BlogView, Error>;

    /// Aggregate statistics over every entry.
    async fn stats(&self) -> Result<BlogStats, Error>;
}

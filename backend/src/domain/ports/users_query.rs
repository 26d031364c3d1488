//! Driving port for user-facing queries.
//!
//! Inbound adapters use this port to list accounts together with the
//! entries they own, without importing persistence concerns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{BlogEntry, BlogId, Error, UserId};

/// Compact blog projection nested under a user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    /// Entry id.
    pub id: BlogId,
    /// Entry title.
    pub title: String,
    /// Entry author.
    pub author: String,
    /// Link to the post.
    pub url: String,
    /// Like count.
    pub likes: u64,
}

impl From<&BlogEntry> for BlogSummary {
    fn from(entry: &BlogEntry) -> Self {
        Self {
            id: entry.id(),
            title: entry.title().to_owned(),
            author: entry.author().to_owned(),
            url: entry.url().to_owned(),
            likes: entry.likes(),
        }
    }
}

/// User with owned entries expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListing {
    /// User id.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: Option<String>,
    /// Owned entries that still exist.
    pub blogs: Vec<BlogSummary>,
}

/// Domain use-case port for listing users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user, each with the entries they own.
    async fn list_users(&self) -> Result<Vec<UserListing>, Error>;
}

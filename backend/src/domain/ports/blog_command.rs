//! Driving port for blog entry mutations.
//!
//! Every method receives the caller's verified claim, if any, as an
//! explicit argument. Inbound adapters never decide authorisation
//! themselves.

use async_trait::async_trait;

use crate::domain::{AuthClaim, BlogFields, BlogId, BlogView, Error};

/// Domain use-case port for creating and changing blog entries.
#[async_trait]
pub trait BlogCommand: Send + Sync {
    /// Create an entry owned by the claimed identity.
    ///
    /// Fails with `Unauthorized` without a claim or when the claimed user no
    /// longer exists, and `InvalidRequest` when a required field is missing.
    async fn create(&self, claim: Option<&AuthClaim>, fields: BlogFields)
    -> Result<BlogView, Error>;

    /// Apply the present fields of `fields` to an existing entry.
    ///
    /// Fails with `NotFound` before the policy check or field validation.
    async fn update(
        &self,
        claim: Option<&AuthClaim>,
        id: &BlogId,
        fields: BlogFields,
    ) -> Result<BlogView, Error>;

    /// Delete an entry owned by the claimed identity.
    async fn delete(&self, claim: Option<&AuthClaim>, id: &BlogId) -> Result<(), Error>;

    /// Append a comment to an entry.
    async fn add_comment(
        &self,
        claim: Option<&AuthClaim>,
        id: &BlogId,
        text: Option<String>,
    ) -> Result<BlogView, Error>;
}

//! Blog domain service.
//!
//! Implements the blog driving ports on top of the blog store and the user
//! directory. The service is the only writer of both sides of the
//! user/blog relationship: create inserts the entry before linking it to
//! its owner, and delete removes the entry before unlinking it.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{
    BlogCommand, BlogQuery, BlogRepository, BlogRepositoryError, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    AuthClaim, BlogEntry, BlogFields, BlogId, BlogPatch, BlogStats, BlogValidationError, BlogView,
    CommentText, Error, NewBlog, Operation, OwnerProjection, UpdatePolicy, UserId, authorize,
};

fn map_blog_error(error: BlogRepositoryError) -> Error {
    match error {
        BlogRepositoryError::Connection { message } => {
            Error::internal(format!("blog store unavailable: {message}"))
        }
        BlogRepositoryError::Query { message } => {
            Error::internal(format!("blog store error: {message}"))
        }
    }
}

fn map_user_error(error: UserPersistenceError) -> Error {
    Error::internal(format!("user directory error: {error}"))
}

fn map_validation_error(error: BlogValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": error.code(),
    }))
}

/// Internal error for a blog write whose owner back-reference could not be
/// kept in step. The blog id travels in the details so operators can repair
/// the link.
fn back_reference_error(blog_id: BlogId, reason: impl std::fmt::Display) -> Error {
    Error::internal(format!(
        "blog {blog_id} stored but owner back-reference update failed: {reason}"
    ))
    .with_details(json!({ "blogId": blog_id.to_string() }))
}

fn require_claim(claim: Option<&AuthClaim>) -> Result<&AuthClaim, Error> {
    claim.ok_or_else(|| Error::unauthorized("authentication required"))
}

fn blog_not_found(id: &BlogId) -> Error {
    Error::not_found(format!("blog {id} not found"))
}

/// Blog service implementing [`BlogCommand`] and [`BlogQuery`].
#[derive(Clone)]
pub struct BlogService<B, U> {
    blogs: Arc<B>,
    users: Arc<U>,
    update_policy: UpdatePolicy,
}

impl<B, U> BlogService<B, U> {
    /// Create a service with the default [`UpdatePolicy::Open`].
    pub fn new(blogs: Arc<B>, users: Arc<U>) -> Self {
        Self {
            blogs,
            users,
            update_policy: UpdatePolicy::default(),
        }
    }

    /// Replace the update authorisation policy.
    #[must_use]
    pub fn with_update_policy(mut self, update_policy: UpdatePolicy) -> Self {
        self.update_policy = update_policy;
        self
    }
}

impl<B, U> BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn load(&self, id: &BlogId) -> Result<BlogEntry, Error> {
        self.blogs
            .find_by_id(id)
            .await
            .map_err(map_blog_error)?
            .ok_or_else(|| blog_not_found(id))
    }

    async fn owner_of(&self, owner: &UserId) -> Result<Option<OwnerProjection>, Error> {
        let user = self
            .users
            .find_by_id(owner)
            .await
            .map_err(map_user_error)?;
        Ok(user.map(|user| user.projection()))
    }

    async fn view(&self, entry: BlogEntry) -> Result<BlogView, Error> {
        let owner = self.owner_of(&entry.owner()).await?;
        Ok(BlogView { entry, owner })
    }

    /// Expand owners for many entries, looking each owner up once.
    async fn views(&self, entries: Vec<BlogEntry>) -> Result<Vec<BlogView>, Error> {
        let mut owners: HashMap<UserId, Option<OwnerProjection>> = HashMap::new();
        let mut views = Vec::with_capacity(entries.len());
        for entry in entries {
            let owner = match owners.entry(entry.owner()) {
                Entry::Occupied(slot) => slot.get().clone(),
                Entry::Vacant(slot) => {
                    let projection = self.owner_of(slot.key()).await?;
                    slot.insert(projection).clone()
                }
            };
            views.push(BlogView { entry, owner });
        }
        Ok(views)
    }
}

#[async_trait]
impl<B, U> BlogCommand for BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn create(
        &self,
        claim: Option<&AuthClaim>,
        fields: BlogFields,
    ) -> Result<BlogView, Error> {
        let claim = require_claim(claim)?;
        let draft = NewBlog::try_new(fields, claim.user_id()).map_err(map_validation_error)?;
        let owner = self
            .users
            .find_by_id(&claim.user_id())
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::unauthorized("token subject no longer exists"))?;

        let entry = self.blogs.insert(&draft).await.map_err(map_blog_error)?;
        match self.users.add_blog(&owner.id(), entry.id()).await {
            Ok(true) => {}
            Ok(false) => return Err(back_reference_error(entry.id(), "owner no longer exists")),
            Err(err) => return Err(back_reference_error(entry.id(), err)),
        }
        debug!(blog_id = %entry.id(), owner = %owner.id(), "created blog");

        Ok(BlogView {
            entry,
            owner: Some(owner.projection()),
        })
    }

    async fn update(
        &self,
        claim: Option<&AuthClaim>,
        id: &BlogId,
        fields: BlogFields,
    ) -> Result<BlogView, Error> {
        let current = self.load(id).await?;
        if self.update_policy == UpdatePolicy::OwnerOnly {
            authorize(claim, &current, Operation::Update)?;
        }
        let patch = BlogPatch::try_new(fields).map_err(map_validation_error)?;
        let entry = self
            .blogs
            .update(id, &patch)
            .await
            .map_err(map_blog_error)?
            .ok_or_else(|| blog_not_found(id))?;
        self.view(entry).await
    }

    async fn delete(&self, claim: Option<&AuthClaim>, id: &BlogId) -> Result<(), Error> {
        let claim = require_claim(claim)?;
        let entry = self.load(id).await?;
        authorize(Some(claim), &entry, Operation::Delete)?;

        // A concurrent delete may win the race; the back-reference is still
        // cleared below.
        if !self.blogs.delete(id).await.map_err(map_blog_error)? {
            warn!(blog_id = %id, "blog vanished before delete");
        }
        self.users
            .remove_blog(&entry.owner(), id)
            .await
            .map_err(|err| back_reference_error(*id, err))?;
        debug!(blog_id = %id, owner = %entry.owner(), "deleted blog");
        Ok(())
    }

    async fn add_comment(
        &self,
        claim: Option<&AuthClaim>,
        id: &BlogId,
        text: Option<String>,
    ) -> Result<BlogView, Error> {
        let claim = require_claim(claim)?;
        let comment = CommentText::new(text.as_deref()).map_err(map_validation_error)?;
        let entry = self.load(id).await?;
        authorize(Some(claim), &entry, Operation::Comment)?;

        let entry = self
            .blogs
            .append_comment(id, &comment)
            .await
            .map_err(map_blog_error)?
            .ok_or_else(|| blog_not_found(id))?;
        self.view(entry).await
    }
}

#[async_trait]
impl<B, U> BlogQuery for BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn list(&self) -> Result<Vec<BlogView>, Error> {
        let entries = self.blogs.list().await.map_err(map_blog_error)?;
        self.views(entries).await
    }

    async fn get(&self, id: &BlogId) -> Result<BlogView, Error> {
        let entry = self.load(id).await?;
        self.view(entry).await
    }

    async fn stats(&self) -> Result<BlogStats, Error> {
        let entries = self.blogs.list().await.map_err(map_blog_error)?;
        Ok(BlogStats::from_entries(&entries))
    }
}

#[cfg(test)]
#[path = "blog_service_tests.rs"]
mod tests;

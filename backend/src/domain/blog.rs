//! Blog entry data model.
//!
//! ## Invariants
//! - `title`, `author`, and `url` are non-empty once trimmed.
//! - `owner` is fixed at creation from the authenticated identity.
//! - `comments` only ever grows, preserving insertion order.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{OwnerProjection, UserId};

/// Validation errors raised while building or patching blog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogValidationError {
    /// Id is not a UUID.
    InvalidId,
    /// Title is missing or blank.
    EmptyTitle,
    /// Author is missing or blank.
    EmptyAuthor,
    /// URL is missing or blank.
    EmptyUrl,
    /// Comment text is missing or blank.
    EmptyComment,
}

impl BlogValidationError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::EmptyTitle => "title",
            Self::EmptyAuthor => "author",
            Self::EmptyUrl => "url",
            Self::EmptyComment => "comment",
        }
    }

    /// Stable machine-readable code for error details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::EmptyTitle => "empty_title",
            Self::EmptyAuthor => "empty_author",
            Self::EmptyUrl => "empty_url",
            Self::EmptyComment => "empty_comment",
        }
    }
}

impl fmt::Display for BlogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "blog id must be a valid UUID"),
            Self::EmptyTitle => write!(f, "title is required"),
            Self::EmptyAuthor => write!(f, "author is required"),
            Self::EmptyUrl => write!(f, "url is required"),
            Self::EmptyComment => write!(f, "comment is required"),
        }
    }
}

impl std::error::Error for BlogValidationError {}

/// Blog entry identifier, generated by the blog store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlogId(Uuid);

impl BlogId {
    /// Parse a [`BlogId`] from textual input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, BlogValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| BlogValidationError::InvalidId)
    }

    /// Generate a new random [`BlogId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<BlogId> for String {
    fn from(value: BlogId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for BlogId {
    type Error = BlogValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn required(value: Option<&str>, error: BlogValidationError) -> Result<String, BlogValidationError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(error),
    }
}

/// Client-supplied blog fields. Every field may be missing on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFields {
    /// New title.
    pub title: Option<String>,
    /// New author.
    pub author: Option<String>,
    /// New link.
    pub url: Option<String>,
    /// New like count.
    pub likes: Option<u64>,
}

/// Validated blog entry awaiting insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    /// Trimmed title.
    pub title: String,
    /// Trimmed author.
    pub author: String,
    /// Trimmed link.
    pub url: String,
    /// Like count.
    pub likes: u64,
    /// Creating user.
    pub owner: UserId,
}

impl NewBlog {
    /// Validate `fields` for an entry owned by `owner`.
    ///
    /// Missing `likes` defaults to zero.
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::{BlogFields, NewBlog, UserId};
    ///
    /// let fields = BlogFields {
    ///     title: Some("React patterns".into()),
    ///     author: Some("Michael Chan".into()),
    ///     url: Some("https://reactpatterns.com/".into()),
    ///     likes: None,
    /// };
    /// let blog = NewBlog::try_new(fields, UserId::random()).unwrap();
    /// assert_eq!(blog.likes, 0);
    /// ```
    pub fn try_new(fields: BlogFields, owner: UserId) -> Result<Self, BlogValidationError> {
        Ok(Self {
            title: required(fields.title.as_deref(), BlogValidationError::EmptyTitle)?,
            author: required(fields.author.as_deref(), BlogValidationError::EmptyAuthor)?,
            url: required(fields.url.as_deref(), BlogValidationError::EmptyUrl)?,
            likes: fields.likes.unwrap_or(0),
            owner,
        })
    }
}

/// Partial update of the mutable blog fields.
///
/// Only fields that are `Some` are applied; required text fields present in
/// the patch must be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
    likes: Option<u64>,
}

impl BlogPatch {
    /// Validate the touched fields of a partial update.
    pub fn try_new(fields: BlogFields) -> Result<Self, BlogValidationError> {
        let BlogFields {
            title,
            author,
            url,
            likes,
        } = fields;
        Ok(Self {
            title: title
                .map(|value| required(Some(&value), BlogValidationError::EmptyTitle))
                .transpose()?,
            author: author
                .map(|value| required(Some(&value), BlogValidationError::EmptyAuthor))
                .transpose()?,
            url: url
                .map(|value| required(Some(&value), BlogValidationError::EmptyUrl))
                .transpose()?,
            likes,
        })
    }
}

/// Non-empty comment text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    /// Validate comment text; blank or missing text is rejected.
    pub fn new(text: Option<&str>) -> Result<Self, BlogValidationError> {
        required(text, BlogValidationError::EmptyComment).map(Self)
    }
}

impl AsRef<str> for CommentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Persisted blog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogEntry {
    id: BlogId,
    title: String,
    author: String,
    url: String,
    likes: u64,
    owner: UserId,
    comments: Vec<String>,
}

impl BlogEntry {
    /// Materialise a validated draft under the store-assigned `id`.
    pub fn from_new(id: BlogId, blog: NewBlog) -> Self {
        let NewBlog {
            title,
            author,
            url,
            likes,
            owner,
        } = blog;
        Self {
            id,
            title,
            author,
            url,
            likes,
            owner,
            comments: Vec::new(),
        }
    }

    /// Entry identifier.
    pub fn id(&self) -> BlogId {
        self.id
    }

    /// Trimmed title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Trimmed author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Trimmed link to the post.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Like count.
    pub fn likes(&self) -> u64 {
        self.likes
    }

    /// Identity of the user that created the entry.
    pub fn owner(&self) -> UserId {
        self.owner
    }

    /// Comments in the order they were added.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Apply a validated partial update. The owner is never touched.
    pub fn apply(&mut self, patch: &BlogPatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(author) = &patch.author {
            self.author.clone_from(author);
        }
        if let Some(url) = &patch.url {
            self.url.clone_from(url);
        }
        if let Some(likes) = patch.likes {
            self.likes = likes;
        }
    }

    /// Append a comment at the end of the sequence.
    pub fn push_comment(&mut self, comment: &CommentText) {
        self.comments.push(comment.as_ref().to_owned());
    }
}

/// Blog entry paired with its expanded owner.
///
/// `owner` is `None` when the owning user record no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogView {
    /// The stored entry.
    pub entry: BlogEntry,
    /// Owner projection, if the user still exists.
    pub owner: Option<OwnerProjection>,
}

//! Domain primitives, services, and ports.
//!
//! Purpose: define the strongly typed blog and user model, the ownership
//! rules that govern mutation, and the services that keep both stores in
//! step. Nothing in here knows about HTTP or a concrete store.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, BlogEntry, and their validated building blocks.
//! - `authorize`: the ownership guard.
//! - BlogService, UserRegistrationService: driving port implementations.

pub mod auth;
pub mod blog;
pub mod blog_service;
pub mod blog_stats;
pub mod error;
pub mod ownership;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_registration;

pub use self::auth::{AuthClaim, BEARER_PREFIX, RegistrationCredentials, bearer_token};
pub use self::blog::{
    BlogEntry, BlogFields, BlogId, BlogPatch, BlogValidationError, BlogView, CommentText, NewBlog,
};
pub use self::blog_service::BlogService;
pub use self::blog_stats::{AuthorBlogCount, AuthorLikes, BlogStats, FavoriteBlog};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ownership::{Operation, UpdatePolicy, authorize};
pub use self::trace_id::TraceId;
pub use self::user::{
    OwnerProjection, PASSWORD_MIN, PasswordHash, USERNAME_MIN, User, UserId, UserValidationError,
    Username,
};
pub use self::user_registration::{UserRegistrationService, map_user_validation_error};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use bloglist::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;

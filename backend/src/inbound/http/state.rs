//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BlogCommand, BlogQuery, TokenVerifier, UserRegistration, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Blog mutations.
    pub blogs: Arc<dyn BlogCommand>,
    /// Blog reads and statistics.
    pub blogs_query: Arc<dyn BlogQuery>,
    /// Account registration.
    pub registration: Arc<dyn UserRegistration>,
    /// User listing.
    pub users: Arc<dyn UsersQuery>,
    /// Bearer token verification.
    pub tokens: Arc<dyn TokenVerifier>,
}

impl HttpState {
    /// Wire state from one service per driving-port pair.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bloglist::domain::{BlogService, UserRegistrationService};
    /// use bloglist::inbound::http::state::HttpState;
    /// use bloglist::outbound::bcrypt_hasher::BcryptPasswordHasher;
    /// use bloglist::outbound::jwt::JwtTokens;
    /// use bloglist::outbound::memory::{InMemoryBlogRepository, InMemoryUserRepository};
    ///
    /// let blogs = Arc::new(InMemoryBlogRepository::new());
    /// let users = Arc::new(InMemoryUserRepository::new());
    /// let state = HttpState::from_services(
    ///     Arc::new(BlogService::new(blogs.clone(), users.clone())),
    ///     Arc::new(UserRegistrationService::new(
    ///         users,
    ///         blogs,
    ///         Arc::new(BcryptPasswordHasher::default()),
    ///     )),
    ///     Arc::new(JwtTokens::new(b"secret")),
    /// );
    /// let _query = state.blogs_query.clone();
    /// ```
    pub fn from_services<B, R>(
        blog_service: Arc<B>,
        user_service: Arc<R>,
        tokens: Arc<dyn TokenVerifier>,
    ) -> Self
    where
        B: BlogCommand + BlogQuery + 'static,
        R: UserRegistration + UsersQuery + 'static,
    {
        Self {
            blogs: blog_service.clone(),
            blogs_query: blog_service,
            registration: user_service.clone(),
            users: user_service,
            tokens,
        }
    }
}

//! Test helpers for inbound HTTP components.
//!
//! Wires the real services over in-memory stores so handler tests exercise
//! the full request path without any external I/O.

use std::sync::Arc;

use actix_web::App;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::web;

use crate::Trace;
use crate::domain::ports::UserRepository;
use crate::domain::{
    BlogService, PasswordHash, UpdatePolicy, User, UserId, UserRegistrationService, Username,
};
use crate::inbound::http::configure;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::outbound::bcrypt_hasher::BcryptPasswordHasher;
use crate::outbound::jwt::JwtTokens;
use crate::outbound::memory::{InMemoryBlogRepository, InMemoryUserRepository};

/// Cheapest cost bcrypt accepts.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Signing secret shared by every test context.
pub const TEST_SECRET: &[u8] = b"bloglist-test-secret";

/// Handles onto the stores and token issuer behind a test [`HttpState`].
pub struct TestContext {
    pub state: HttpState,
    pub tokens: JwtTokens,
    pub blogs: Arc<InMemoryBlogRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

/// Context using the default update policy.
pub fn test_context() -> TestContext {
    test_context_with_policy(UpdatePolicy::default())
}

/// Context with an explicit update policy.
pub fn test_context_with_policy(policy: UpdatePolicy) -> TestContext {
    let blogs = Arc::new(InMemoryBlogRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = JwtTokens::new(TEST_SECRET);
    let blog_service =
        BlogService::new(blogs.clone(), users.clone()).with_update_policy(policy);
    let user_service = UserRegistrationService::new(
        users.clone(),
        blogs.clone(),
        Arc::new(BcryptPasswordHasher::new(TEST_BCRYPT_COST)),
    );
    let state = HttpState::from_services(
        Arc::new(blog_service),
        Arc::new(user_service),
        Arc::new(tokens.clone()),
    );
    TestContext {
        state,
        tokens,
        blogs,
        users,
    }
}

impl TestContext {
    /// Insert a user straight into the store and sign a token for it.
    pub async fn seed_user(&self, username: &str) -> (UserId, String) {
        let user = User::new(
            UserId::random(),
            Username::new(username).expect("valid username"),
            Some(format!("{username} name")),
            PasswordHash::new("unused"),
        );
        self.users.insert(&user).await.expect("seed user");
        let token = self.tokens.issue(user.id(), username).expect("sign token");
        (user.id(), token)
    }

    /// Application with the full route table, tracing, and a ready probe.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let health = HealthState::new();
        health.mark_ready();
        App::new()
            .app_data(web::Data::new(self.state.clone()))
            .app_data(web::Data::new(health))
            .wrap(Trace)
            .configure(configure)
    }
}

/// `Authorization` header carrying `token` as a bearer credential.
pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}

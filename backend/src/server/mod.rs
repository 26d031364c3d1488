//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use bloglist::Trace;
#[cfg(debug_assertions)]
use bloglist::doc::ApiDoc;
use bloglist::domain::{BlogService, UserRegistrationService};
use bloglist::inbound::http::configure;
use bloglist::inbound::http::health::HealthState;
use bloglist::inbound::http::state::HttpState;
use bloglist::outbound::bcrypt_hasher::BcryptPasswordHasher;
use bloglist::outbound::jwt::JwtTokens;
use bloglist::outbound::memory::{InMemoryBlogRepository, InMemoryUserRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the services over fresh in-memory stores.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let blogs = Arc::new(InMemoryBlogRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = JwtTokens::new(&config.jwt_secret).with_ttl(config.token_ttl);
    let blog_service =
        BlogService::new(blogs.clone(), users.clone()).with_update_policy(config.update_policy);
    let user_service = UserRegistrationService::new(
        users,
        blogs,
        Arc::new(BcryptPasswordHasher::default()),
    );
    web::Data::new(HttpState::from_services(
        Arc::new(blog_service),
        Arc::new(user_service),
        Arc::new(tokens),
    ))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    info!(
        bind_addr = %config.bind_addr(),
        update_policy = ?config.update_policy,
        "starting HTTP server"
    );

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}

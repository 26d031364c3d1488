//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP handler, the domain schema wrappers from
//! [`crate::inbound::http::schemas`], and the bearer-token security scheme.
//! Swagger UI serves it at `/docs` in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::blogs::{BlogRequest, BlogResponse, CommentRequest, OwnerResponse};
use crate::inbound::http::schemas::{
    BlogStatsSchema, ErrorCodeSchema, ErrorSchema, UserAccountSchema, UserListingSchema,
};
use crate::inbound::http::users::RegisterRequest;

/// Name of the bearer security scheme referenced by handler annotations.
pub const BEARER_SCHEME: &str = "BearerToken";

/// Enrich the generated document with the bearer security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("HS256 token whose subject is the user id."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Blog list API",
        description = "Multi-user blog list with bearer-token authorisation and owner-only deletes.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::blog_stats,
        crate::inbound::http::blogs::get_blog,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::update_blog,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::blogs::add_comment,
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BlogRequest,
        BlogResponse,
        CommentRequest,
        OwnerResponse,
        RegisterRequest,
        BlogStatsSchema,
        UserAccountSchema,
        UserListingSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "blogs", description = "Blog entries, comments, and statistics"),
        (name = "users", description = "Account registration and listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credential missing, malformed, or expired.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated, but not the owner of the blog entry.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "title is required")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "6f1c1e8e-8f8a-4d5e-9a55-2f9b0c6d7e11")]
    trace_id: Option<String>,
    /// Supplementary error details, e.g. `{"field": "title", "code": "empty_title"}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::FavoriteBlog`].
#[derive(ToSchema)]
#[schema(as = FavoriteBlog)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FavoriteBlogSchema {
    title: String,
    author: String,
    likes: u64,
}

/// OpenAPI schema for [`crate::domain::AuthorBlogCount`].
#[derive(ToSchema)]
#[schema(as = AuthorBlogCount)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AuthorBlogCountSchema {
    author: String,
    blogs: usize,
}

/// OpenAPI schema for [`crate::domain::AuthorLikes`].
#[derive(ToSchema)]
#[schema(as = AuthorLikes)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AuthorLikesSchema {
    author: String,
    likes: u64,
}

/// OpenAPI schema for [`crate::domain::BlogStats`].
///
/// Aggregates are `null` when no entries exist; ties go to the first entry
/// in store order.
#[derive(ToSchema)]
#[schema(as = BlogStats, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BlogStatsSchema {
    #[schema(example = 8)]
    total_likes: u64,
    favorite_blog: Option<FavoriteBlogSchema>,
    most_blogs: Option<AuthorBlogCountSchema>,
    most_likes: Option<AuthorLikesSchema>,
}

/// OpenAPI schema for [`crate::domain::ports::UserAccount`].
#[derive(ToSchema)]
#[schema(as = UserAccount)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserAccountSchema {
    #[schema(format = Uuid)]
    id: String,
    #[schema(example = "mluukkai")]
    username: String,
    name: Option<String>,
    /// Ids of the blogs this user owns.
    blogs: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::ports::BlogSummary`].
#[derive(ToSchema)]
#[schema(as = BlogSummary)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BlogSummarySchema {
    #[schema(format = Uuid)]
    id: String,
    title: String,
    author: String,
    url: String,
    likes: u64,
}

/// OpenAPI schema for [`crate::domain::ports::UserListing`].
#[derive(ToSchema)]
#[schema(as = UserListing)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserListingSchema {
    #[schema(format = Uuid)]
    id: String,
    username: String,
    name: Option<String>,
    blogs: Vec<BlogSummarySchema>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "Error");
        assert!(schema_json.contains("traceId"), "schema should use camelCase");
        assert!(schema_json.contains("message"));
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "unauthorized",
            "forbidden",
            "not_found",
            "conflict",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn stats_schema_uses_camel_case_aggregates() {
        let schema_json = schema_to_json::<BlogStatsSchema>();
        assert_eq!(BlogStatsSchema::name(), "BlogStats");
        for field in ["totalLikes", "favoriteBlog", "mostBlogs", "mostLikes"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}

//! Blog list HTTP handlers.
//!
//! ```text
//! GET    /api/blogs
//! GET    /api/blogs/stats
//! GET    /api/blogs/{id}
//! POST   /api/blogs                 (bearer)
//! PUT    /api/blogs/{id}
//! DELETE /api/blogs/{id}            (bearer, owner only)
//! POST   /api/blogs/{id}/comments   (bearer)
//! ```
//!
//! Handlers only translate between JSON and the driving ports; every
//! authorisation decision is made by the domain from the optional claim the
//! [`Credentials`] extractor yields.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BlogFields, BlogStats, BlogView, OwnerProjection};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::Credentials;
use crate::inbound::http::schemas::{BlogStatsSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_blog_id;

/// Request body for creating or updating a blog entry.
///
/// On create `title`, `author`, and `url` are required and `likes` defaults
/// to zero. On update every field is optional and only supplied fields
/// change.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogRequest {
    /// Entry title.
    #[schema(example = "Go To Statement Considered Harmful")]
    pub title: Option<String>,
    /// Author of the linked post.
    #[schema(example = "Edsger W. Dijkstra")]
    pub author: Option<String>,
    /// Link to the post.
    #[schema(example = "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf")]
    pub url: Option<String>,
    /// Like count; zero when omitted on create.
    #[schema(example = 5)]
    pub likes: Option<u64>,
}

impl From<BlogRequest> for BlogFields {
    fn from(value: BlogRequest) -> Self {
        Self {
            title: value.title,
            author: value.author,
            url: value.url,
            likes: value.likes,
        }
    }
}

/// Request body for appending a comment.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CommentRequest {
    /// Comment text; must not be blank.
    #[schema(example = "a classic")]
    pub comment: Option<String>,
}

/// Public projection of the owning user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct OwnerResponse {
    /// User id.
    #[schema(format = Uuid)]
    pub id: String,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: Option<String>,
}

impl From<OwnerProjection> for OwnerResponse {
    fn from(value: OwnerProjection) -> Self {
        Self {
            id: value.id.to_string(),
            username: value.username,
            name: value.name,
        }
    }
}

/// Blog entry as returned to clients.
///
/// `user` is `null` when the owning account no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    /// Entry id.
    #[schema(format = Uuid)]
    pub id: String,
    /// Entry title.
    pub title: String,
    /// Author of the linked post.
    pub author: String,
    /// Link to the post.
    pub url: String,
    /// Like count.
    pub likes: u64,
    /// Owner, or `null` once the account is gone.
    pub user: Option<OwnerResponse>,
    /// Comments, oldest first.
    pub comments: Vec<String>,
}

impl From<BlogView> for BlogResponse {
    fn from(value: BlogView) -> Self {
        let BlogView { entry, owner } = value;
        Self {
            id: entry.id().to_string(),
            title: entry.title().to_owned(),
            author: entry.author().to_owned(),
            url: entry.url().to_owned(),
            likes: entry.likes(),
            user: owner.map(OwnerResponse::from),
            comments: entry.comments().to_vec(),
        }
    }
}

/// List every blog entry with its owner expanded.
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "All blog entries", body = [BlogResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "listBlogs",
    security([])
)]
#[get("/blogs")]
pub async fn list_blogs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BlogResponse>>> {
    let views = state.blogs_query.list().await?;
    Ok(web::Json(views.into_iter().map(BlogResponse::from).collect()))
}

/// Aggregate statistics over all blog entries.
#[utoipa::path(
    get,
    path = "/api/blogs/stats",
    responses(
        (status = 200, description = "Blog statistics", body = BlogStatsSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "blogStats",
    security([])
)]
#[get("/blogs/stats")]
pub async fn blog_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<BlogStats>> {
    Ok(web::Json(state.blogs_query.stats().await?))
}

/// Fetch one blog entry.
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog entry id (UUID)")),
    responses(
        (status = 200, description = "Blog entry", body = BlogResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such entry", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "getBlog",
    security([])
)]
#[get("/blogs/{id}")]
pub async fn get_blog(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BlogResponse>> {
    let id = parse_blog_id(&path)?;
    let view = state.blogs_query.get(&id).await?;
    Ok(web::Json(BlogResponse::from(view)))
}

/// Create a blog entry owned by the caller.
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = BlogRequest,
    responses(
        (
            status = 201,
            description = "Entry created",
            headers(("Location" = String, description = "URL of the new entry")),
            body = BlogResponse
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "createBlog",
    security(("BearerToken" = []))
)]
#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    credentials: Credentials,
    payload: web::Json<BlogRequest>,
) -> ApiResult<HttpResponse> {
    let view = state
        .blogs
        .create(credentials.claim(), payload.into_inner().into())
        .await?;
    let body = BlogResponse::from(view);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/blogs/{}", body.id)))
        .json(body))
}

/// Update the supplied fields of a blog entry.
///
/// Open to anonymous callers under the default policy; with the
/// `owner-only` policy only the owner may update.
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog entry id (UUID)")),
    request_body = BlogRequest,
    responses(
        (status = 200, description = "Updated entry", body = BlogResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Not permitted under the update policy", body = ErrorSchema),
        (status = 404, description = "No such entry", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "updateBlog",
    security((), ("BearerToken" = []))
)]
#[put("/blogs/{id}")]
pub async fn update_blog(
    state: web::Data<HttpState>,
    credentials: Credentials,
    path: web::Path<String>,
    payload: web::Json<BlogRequest>,
) -> ApiResult<web::Json<BlogResponse>> {
    let id = parse_blog_id(&path)?;
    let view = state
        .blogs
        .update(credentials.claim(), &id, payload.into_inner().into())
        .await?;
    Ok(web::Json(BlogResponse::from(view)))
}

/// Delete a blog entry. Only its owner may do so.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog entry id (UUID)")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 401, description = "Missing token or not the owner", body = ErrorSchema),
        (status = 404, description = "No such entry", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog",
    security(("BearerToken" = []))
)]
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    credentials: Credentials,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    state.blogs.delete(credentials.claim(), &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Append a comment to a blog entry.
#[utoipa::path(
    post,
    path = "/api/blogs/{id}/comments",
    params(("id" = String, Path, description = "Blog entry id (UUID)")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment appended", body = BlogResponse),
        (status = 400, description = "Blank comment or malformed id", body = ErrorSchema),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorSchema),
        (status = 404, description = "No such entry", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "addComment",
    security(("BearerToken" = []))
)]
#[post("/blogs/{id}/comments")]
pub async fn add_comment(
    state: web::Data<HttpState>,
    credentials: Credentials,
    path: web::Path<String>,
    payload: web::Json<CommentRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    let view = state
        .blogs
        .add_comment(credentials.claim(), &id, payload.into_inner().comment)
        .await?;
    Ok(HttpResponse::Created().json(BlogResponse::from(view)))
}

#[cfg(test)]
#[path = "blogs_tests.rs"]
mod tests;

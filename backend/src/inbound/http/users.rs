//! User account HTTP handlers.
//!
//! ```text
//! POST /api/users {"username":"mluukkai","name":"Matti Luukkainen","password":"salainen"}
//! GET  /api/users
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::UserListing;
use crate::domain::{RegistrationCredentials, UserValidationError, map_user_validation_error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserAccountSchema, UserListingSchema};
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /api/users`.
///
/// Missing `username` or `password` fields are treated as empty and fail
/// the length checks.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    /// Login name, at least three characters once trimmed.
    #[serde(default)]
    #[schema(example = "mluukkai")]
    pub username: String,
    /// Optional display name.
    #[schema(example = "Matti Luukkainen")]
    pub name: Option<String>,
    /// Plaintext password, at least three characters.
    #[serde(default)]
    #[schema(example = "salainen")]
    pub password: String,
}

impl TryFrom<RegisterRequest> for RegistrationCredentials {
    type Error = UserValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, value.name, &value.password)
    }
}

/// Register a new user account.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserAccountSchema),
        (status = 400, description = "Username or password too short", body = ErrorSchema),
        (status = 409, description = "Username already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser",
    security([])
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = RegistrationCredentials::try_from(payload.into_inner())
        .map_err(map_user_validation_error)?;
    let account = state.registration.register(credentials).await?;
    Ok(HttpResponse::Created().json(account))
}

/// List users with summaries of the blogs they own.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserListingSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserListing>>> {
    Ok(web::Json(state.users.list_users().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{bearer, test_context};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(json!({"username": "ab", "password": "secret"}), "username", "username_too_short")]
    #[case(json!({"username": "root", "password": "pw"}), "password", "password_too_short")]
    #[case(json!({"password": "secret"}), "username", "username_too_short")]
    #[actix_web::test]
    async fn short_credentials_are_rejected(
        #[case] body: Value,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let ctx = test_context();
        let app = actix_test::init_service(ctx.app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(&body)
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], field);
        assert_eq!(body["details"]["code"], code);
    }

    #[rstest]
    #[actix_web::test]
    async fn registration_returns_the_account_without_the_hash() {
        let ctx = test_context();
        let app = actix_test::init_service(ctx.app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "mluukkai", "name": "Matti", "password": "salainen"}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["username"], "mluukkai");
        assert_eq!(body["name"], "Matti");
        assert_eq!(body["blogs"], json!([]));
        assert!(body.get("passwordHash").is_none());
        assert!(!body.to_string().contains("salainen"));
    }

    #[rstest]
    #[actix_web::test]
    async fn duplicate_usernames_conflict() {
        let ctx = test_context();
        ctx.seed_user("root").await;
        let app = actix_test::init_service(ctx.app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "root", "password": "secret"}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "conflict");
        assert_eq!(body["details"]["code"], "duplicate_username");
    }

    #[rstest]
    #[actix_web::test]
    async fn listing_expands_owned_blogs() {
        let ctx = test_context();
        let (_, token) = ctx.seed_user("root").await;
        let app = actix_test::init_service(ctx.app()).await;
        let create = actix_test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header(bearer(&token))
            .set_json(json!({"title": "First", "author": "A", "url": "http://a"}))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, create).await.status(),
            StatusCode::CREATED
        );

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/users").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        let users = body.as_array().expect("array");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["username"], "root");
        assert_eq!(users[0]["blogs"][0]["title"], "First");
        assert_eq!(users[0]["blogs"][0]["likes"], 0);
    }
}

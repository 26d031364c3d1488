//! Bearer credential extraction.
//!
//! `Credentials` resolves the `Authorization` header through the configured
//! [`TokenVerifier`](crate::domain::ports::TokenVerifier). A missing or
//! non-bearer header yields no claim; a bearer token that fails
//! verification rejects the request with 401. Whether a claim is required
//! is left to the domain.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::{AuthClaim, Error, bearer_token};
use crate::inbound::http::state::HttpState;

/// Optional verified identity of the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials(Option<AuthClaim>);

impl Credentials {
    /// Claim to pass to the domain, if any.
    pub fn claim(&self) -> Option<&AuthClaim> {
        self.0.as_ref()
    }

    fn resolve(req: &HttpRequest) -> Result<Self, Error> {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        let Some(token) = bearer_token(header) else {
            return Ok(Self(None));
        };
        let state = req
            .app_data::<web::Data<HttpState>>()
            .ok_or_else(|| Error::internal("HTTP state is not configured"))?;
        let claim = state.tokens.verify(token).map_err(|err| {
            debug!(error = %err, "rejecting bearer credential");
            Error::unauthorized("invalid or expired token")
        })?;
        Ok(Self(Some(claim)))
    }
}

impl FromRequest for Credentials {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::resolve(req).map_err(actix_web::Error::from))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::UserId;
    use crate::domain::ports::{MockTokenVerifier, TokenVerificationError};
    use crate::inbound::http::test_utils::{TestContext, test_context};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test};
    use rstest::rstest;

    async fn whoami(credentials: Credentials) -> HttpResponse {
        match credentials.claim() {
            Some(claim) => HttpResponse::Ok().body(claim.user_id().to_string()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    async fn call(state: HttpState, header: Option<&str>) -> (StatusCode, String) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/", web::get().to(whoami)),
        )
        .await;
        let mut req = actix_test::TestRequest::get().uri("/");
        if let Some(value) = header {
            req = req.insert_header((AUTHORIZATION, value));
        }
        let res = actix_test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body = actix_test::read_body(res).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[rstest]
    #[case(None)]
    #[case(Some("Basic cm9vdDpzZWtyZXQ="))]
    #[case(Some("Bearer "))]
    #[actix_web::test]
    async fn absent_credentials_are_anonymous(#[case] header: Option<&str>) {
        let mut tokens = MockTokenVerifier::new();
        tokens.expect_verify().times(0);
        let mut state = test_context().state;
        state.tokens = Arc::new(tokens);

        let (status, body) = call(state, header).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "anonymous");
    }

    #[rstest]
    #[actix_web::test]
    async fn verified_tokens_yield_a_claim() {
        let TestContext { state, tokens, .. } = test_context();
        let user_id = UserId::random();
        let token = tokens.issue(user_id, "root").expect("sign");

        let (status, body) = call(state, Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, user_id.to_string());
    }

    #[rstest]
    #[actix_web::test]
    async fn rejected_tokens_are_unauthorized() {
        let mut tokens = MockTokenVerifier::new();
        tokens
            .expect_verify()
            .times(1)
            .return_once(|_| Err(TokenVerificationError::expired()));
        let mut state = test_context().state;
        state.tokens = Arc::new(tokens);

        let (status, body) = call(state, Some("Bearer stale")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("\"code\":\"unauthorized\""));
    }
}

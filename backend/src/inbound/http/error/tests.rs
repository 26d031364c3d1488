//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn internal_error_case(expected_trace_id: String) -> Error {
    Error::internal("blog 42 stored but owner back-reference update failed")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"blogId": "42"}))
}

#[fixture]
fn invalid_request_case(expected_trace_id: String) -> Error {
    Error::invalid_request("title is required")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"field": "title", "code": "empty_title"}))
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("not the owner"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> serde_json::Value {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(
    #[from(internal_error_case)] internal_error: Error,
    expected_trace_id: String,
) {
    let body = assert_error_response(
        internal_error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["traceId"], TRACE_ID);
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(
    #[from(invalid_request_case)] invalid_request: Error,
    expected_trace_id: String,
) {
    let body = assert_error_response(
        invalid_request,
        StatusCode::BAD_REQUEST,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "title is required");
    assert_eq!(body["details"], json!({"field": "title", "code": "empty_title"}));
}

#[rstest]
#[actix_web::test]
async fn ownership_failures_are_distinguishable_by_code() {
    let body = assert_error_response(
        Error::forbidden("only the owner may modify this blog"),
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
    assert_eq!(body["code"], "forbidden");
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::not_found("blog missing");
    let body = assert_error_response(error, StatusCode::NOT_FOUND, None).await;
    assert!(body.get("traceId").is_none());
}

#[rstest]
fn redaction_leaves_client_errors_untouched() {
    let error = Error::conflict("username taken").with_details(json!({"field": "username"}));
    assert_eq!(redact_if_internal(&error), error);
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    use actix_web::error;

    let actix_err = error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.trace_id(), None);
    assert_eq!(err.details(), None);
}

//! Shared validation helpers for inbound HTTP adapters.
//!
//! Malformed bodies and path parameters become `InvalidRequest` errors with
//! `{field, code}` details, matching the domain's own validation failures.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError};
use serde_json::json;

use crate::domain::{BlogId, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidJson,
    InvalidPath,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::InvalidPath => "invalid_path",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("{name} must be a valid UUID")).with_details(json!({
        "field": name,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

/// Parse a blog id taken from the request path.
pub(crate) fn parse_blog_id(value: &str) -> Result<BlogId, Error> {
    BlogId::new(value).map_err(|_| invalid_uuid_error(FieldName::new("id"), value))
}

/// `JsonConfig` error handler: malformed or oversized bodies become
/// `InvalidRequest` instead of actix's plain-text 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "request body must be application/json".to_owned(),
        other => format!("request body is not valid JSON: {other}"),
    };
    field_error(FieldName::new("body"), ErrorCode::InvalidJson, message).into()
}

/// `PathConfig` error handler for path segments that fail to deserialise.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    field_error(
        FieldName::new("path"),
        ErrorCode::InvalidPath,
        format!("invalid path parameter: {err}"),
    )
    .into()
}

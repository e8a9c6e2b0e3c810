//! Uniform JSON error envelope and error→status translation.
//!
//! Every non-2xx response is `{success:false, error:<status>, message}`;
//! nothing from the store or verifier internals leaks into the body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use barkeep_auth::AuthError;

/// `{success:false, error:<status>, message}` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn bad_request() -> Response {
    json_error(StatusCode::BAD_REQUEST, "Bad Request")
}

pub fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "Resource Not Found")
}

pub fn unprocessable() -> Response {
    json_error(StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable")
}

pub fn internal_error() -> Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "An Error Occurred")
}

/// Translate an authorization failure into its response.
///
/// Token-integrity failures map to 401; a verified token that merely
/// lacks the required scope maps to 403; a token with no permissions
/// claim at all maps to 400 (issuer misconfiguration rather than caller
/// fault). The message is the verifier's own description, which is
/// machine-checkable and free of internal detail.
pub fn auth_error_to_response(err: AuthError) -> Response {
    let status = match err {
        AuthError::MissingHeader
        | AuthError::MalformedHeader
        | AuthError::InvalidHeader
        | AuthError::TokenExpired
        | AuthError::InvalidClaims
        | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
        AuthError::MissingPermissionsClaim => StatusCode::BAD_REQUEST,
        AuthError::InsufficientPermission(_) => StatusCode::FORBIDDEN,
        AuthError::KeySetUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    json_error(status, err.to_string())
}

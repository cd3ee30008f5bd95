use poem::{IntoResponse, Response, http::StatusCode, web::Json};
use poem_openapi::error::AuthorizationError;
use serde_json::json;

use crate::domain::errors::DomainError;

const SERVER_ERROR: &str = "Server error";

pub fn domain_error(err: DomainError) -> poem::Error {
    let status = match &err {
        DomainError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::AlreadyExists(_) | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Other(source) => {
            tracing::error!(error = ?source, "request failed");
            return poem::Error::from_string(SERVER_ERROR, StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    poem::Error::from_string(err.to_string(), status)
}

/// Renders every error leaving the app as `{ "message": ... }`.
pub async fn render_error(err: poem::Error) -> Response {
    let status = err.status();
    let message = if status.is_server_error() {
        SERVER_ERROR.to_string()
    } else if err.is::<AuthorizationError>() {
        "Authentication required".to_string()
    } else {
        err.to_string()
    };

    Json(json!({ "message": message }))
        .with_status(status)
        .into_response()
}

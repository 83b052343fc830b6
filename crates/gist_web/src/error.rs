use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gist_core::Error;
use serde_json::json;

pub const GENERIC_MESSAGE: &str = "An error occurred during your request.";

/// Maps pipeline errors onto the `{ error: { message } }` wire shape.
/// Completion-model failures with an upstream status are forwarded verbatim.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": { "message": message } }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Some((status, body)) = self.0.upstream_response() {
            tracing::error!(status, body = %body, "Completion model error");
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, Json(body.clone())).into_response();
        }

        match &self.0 {
            Error::Validation(message) => error_body(StatusCode::BAD_REQUEST, message),
            Error::Configuration(message) => {
                tracing::error!("{}", message);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            other => {
                tracing::error!("Error with summarization request: {}", other);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE)
            }
        }
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::pipeline::PipelineError;

/// Request-level faults surfaced by the HTTP gateway.
///
/// Every variant renders as a single JSON error object; the caller never
/// sees a stack trace or a partial recommendation list.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing or wrong `x-api-key`. The message doubles as the response
    /// body, so the wording is part of the API contract.
    #[error("Forbidden: Invalid API key.")]
    Forbidden,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Forbidden => StatusCode::FORBIDDEN,
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

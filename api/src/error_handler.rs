//! Public application error type for the HTTP surface.
//!
//! Every failure becomes a JSON body of the shape `{"error": string}`:
//! user-input problems map to 400, everything else to 500. Chat-model
//! failures never reach this type — they are absorbed into the answer string
//! by the gateway.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Request ---
    #[error("{0}")]
    BadRequest(String),

    // --- IO / network / server ---
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("server error: {0}")]
    Server(#[source] std::io::Error),

    // --- Boot / pipeline ---
    #[error(transparent)]
    Rag(#[from] docs_rag::RagError),

    #[error(transparent)]
    Llm(#[from] llm_service::LlmError),

    #[error(transparent)]
    Gateway(#[from] qa_gateway::GatewayError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // 5xx
            AppError::Bind(_)
            | AppError::Server(_)
            | AppError::Rag(_)
            | AppError::Llm(_)
            | AppError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(target: "api::error", error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let err = AppError::BadRequest("No query provided".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No query provided");
    }

    #[test]
    fn retrieval_errors_map_to_500() {
        let err = AppError::Rag(docs_rag::RagError::Qdrant("connection refused".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

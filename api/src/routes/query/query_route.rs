//! POST /query — answers a question with RAG context.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::debug;

use qa_gateway::{AskOptions, QaAnswer, answer_question};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::query::query_request::{QueryRequest, QueryResponse},
};

/// Handler: POST /query
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/query \
///   -H 'content-type: application/json' \
///   -d '{"query":"What is your office phone number?"}'
/// ```
pub async fn query_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QueryRequest>,
) -> AppResult<Json<QueryResponse>> {
    let question = body.query.trim();
    if question.is_empty() {
        return Err(AppError::BadRequest("No query provided".into()));
    }

    debug!(target: "api::query", query = %question, "query_route: start");

    let QaAnswer { answer, context } = answer_question(
        &state.embedder,
        &state.index,
        &state.chat,
        question,
        AskOptions {
            top_k: state.top_k,
        },
    )
    .await?;

    debug!(
        target: "api::query",
        hits = context.len(),
        "query_route: answered"
    );

    Ok(Json(QueryResponse {
        query: question.to_string(),
        answer,
        context_count: context.len(),
        context_results: context,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    // Client construction is lazy (no sockets are opened), so a state built
    // from defaults is safe to use for the validation path.
    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::from_env().expect("default state"))
    }

    #[tokio::test]
    async fn blank_query_is_rejected_before_the_pipeline_runs() {
        let result = query_route(
            State(test_state()),
            Json(QueryRequest { query: "   ".into() }),
        )
        .await;

        let err = result.err().expect("expected 400");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No query provided");
    }

    #[tokio::test]
    async fn missing_query_field_is_rejected() {
        let body: QueryRequest = serde_json::from_str("{}").unwrap();
        let result = query_route(State(test_state()), Json(body)).await;

        let err = result.err().expect("expected 400");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}

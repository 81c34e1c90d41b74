pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::analysis::handlers as analysis;
use crate::extraction::handlers as extraction;
use crate::generation::handlers as generation;
use crate::state::AppState;

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Drafting
        .route("/resume-draft", post(generation::handle_resume_draft))
        // Analysis
        .route("/job-analysis", post(analysis::handle_job_analysis))
        .route("/resume-analysis", post(analysis::handle_resume_analysis))
        // Extraction
        .route(
            "/parse-resume",
            post(extraction::handle_parse_resume)
                .layer(DefaultBodyLimit::max(extraction::MAX_UPLOAD_BODY_BYTES)),
        )
        .with_state(state)
}

#[cfg(test)]
pub mod testing {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::build_router;
    use crate::llm_client::testing::ScriptedGateway;
    use crate::state::AppState;

    /// Sends a JSON POST through the full router and returns status plus parsed body.
    pub async fn post_json(
        gateway: Arc<ScriptedGateway>,
        uri: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        let app = build_router(AppState::new(gateway));
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

//! Axum route handlers for the Headline API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::scoring::comparator::{compare_headlines, Comparison};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub headlines: Vec<String>,
}

/// POST /api/v1/headlines/compare
///
/// Scores 2–5 headlines, picks the top one by CTR potential and returns CTA
/// suggestions for it.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<Comparison>, AppError> {
    let comparison = compare_headlines(state.llm.as_ref(), &request.headlines).await?;
    Ok(Json(comparison))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{self, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::llm_client::mock::ScriptedCompletion;
    use crate::routes::build_router;
    use crate::scoring::comparator::fixtures::{scoring_reply, CTA_REPLY};
    use crate::state::AppState;

    fn app(llm: Arc<ScriptedCompletion>) -> axum::Router {
        build_router(AppState { llm })
    }

    async fn post_json(router: axum::Router, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::post("/api/v1/headlines/compare")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_api_compare_returns_scorecard() {
        let llm = Arc::new(ScriptedCompletion::new(vec![
            Ok(scoring_reply(&[("Save 50% Today Only", 9), ("Act Now", 7)])),
            Ok(CTA_REPLY.to_string()),
        ]));

        let (status, payload) = post_json(
            app(llm.clone()),
            json!({"headlines": ["Save 50% Today Only", "Act Now"]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["top_headline"], "Save 50% Today Only");
        assert_eq!(payload["top_index"], 0);
        assert_eq!(payload["records"].as_array().map(Vec::len), Some(2));
        assert_eq!(payload["records"][1]["ctr_potential"], 7);
        assert_eq!(payload["columns"][1], "CTR Potential");
        assert_eq!(payload["cta_suggestions"], CTA_REPLY);
        assert!(payload["cta_error"].is_null());
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_api_compare_rejects_single_headline() {
        let llm = Arc::new(ScriptedCompletion::new(vec![]));

        let (status, payload) =
            post_json(app(llm.clone()), json!({"headlines": ["Lonely headline"]})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_api_compare_reports_service_failure() {
        let llm = Arc::new(ScriptedCompletion::new(vec![Err("invalid api key".to_string())]));

        let (status, payload) =
            post_json(app(llm.clone()), json!({"headlines": ["One", "Two"]})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(payload["error"]["code"], "LLM_ERROR");
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_api_compare_reports_parse_failure() {
        let llm = Arc::new(ScriptedCompletion::new(vec![Ok("not json".to_string())]));

        let (status, payload) =
            post_json(app(llm.clone()), json!({"headlines": ["One", "Two"]})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(payload["error"]["code"], "PARSE_ERROR");
        assert_eq!(llm.calls(), 1);
    }
}

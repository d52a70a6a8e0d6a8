pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::advice::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Advice API
        .route("/api/v1/advice", post(handlers::handle_advice))
        .route("/api/v1/advice/options", get(handlers::handle_options))
        .route("/api/v1/references", get(handlers::handle_references))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::advice::references::ReferenceLibrary;
    use crate::advice::service::tests::StubCompletion;
    use crate::config::Config;
    use crate::llm_client::ModelId;

    fn test_config() -> Config {
        Config {
            google_api_key: "test-key".to_string(),
            default_model: ModelId::Gemini15Flash,
            api_base: "http://localhost:0".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn test_state(llm: Arc<StubCompletion>) -> AppState {
        AppState {
            llm,
            config: test_config(),
            library: Arc::new(ReferenceLibrary::builtin()),
        }
    }

    fn ok_stub() -> Arc<StubCompletion> {
        Arc::new(StubCompletion::new(|| Ok(Some("Some advice.".to_string()))))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_advice(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/advice")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(build_router(test_state(ok_stub())), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_advice_end_to_end() {
        let stub = ok_stub();
        let router = build_router(test_state(stub.clone()));

        let (status, body) = send(
            router,
            post_advice(json!({"age_group": "Teenager", "concern": "exam stress"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["advice"], "Some advice.");
        assert_eq!(body["age_group"], "Teenager");
        assert_eq!(body["model"], "gemini-1.5-flash");
        assert_eq!(
            body["video_link"],
            "https://www.youtube.com/results?search_query=Teenager+mental+health+advice+for+exam+stress"
        );
        assert_eq!(body["quotes"].as_array().unwrap().len(), 3);
        assert_eq!(body["spiritual_insights"].as_array().unwrap().len(), 5);
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_concern_rejected_without_completion_call() {
        for concern in ["", "   \n\t"] {
            let stub = ok_stub();
            let router = build_router(test_state(stub.clone()));

            let (status, body) = send(
                router,
                post_advice(json!({"age_group": "Teenager", "concern": concern})),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            assert_eq!(stub.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_missing_concern_field_rejected() {
        let stub = ok_stub();
        let router = build_router(test_state(stub.clone()));
        let (status, _) = send(router, post_advice(json!({"age_group": "Senior"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_age_group_rejected() {
        let stub = ok_stub();
        let router = build_router(test_state(stub.clone()));
        let (status, body) = send(
            router,
            post_advice(json!({"age_group": "Toddler", "concern": "sleep"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_model_selection_forwarded() {
        let stub = ok_stub();
        let router = build_router(test_state(stub.clone()));
        let (status, body) = send(
            router,
            post_advice(json!({
                "age_group": "Senior",
                "concern": "loneliness",
                "model": "gemini-1.5-pro"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["model"], "gemini-1.5-pro");
        assert_eq!(stub.calls.lock().unwrap()[0].1, ModelId::Gemini15Pro);
    }

    #[tokio::test]
    async fn test_unknown_model_rejected() {
        let stub = ok_stub();
        let router = build_router(test_state(stub.clone()));
        let (status, body) = send(
            router,
            post_advice(json!({
                "age_group": "Senior",
                "concern": "loneliness",
                "model": "gpt-4"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("gpt-4"));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_completion_failure_still_returns_ok() {
        let stub = Arc::new(StubCompletion::new(|| {
            Err(crate::llm_client::LlmError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            })
        }));
        let router = build_router(test_state(stub));
        let (status, body) = send(
            router,
            post_advice(json!({"age_group": "Child", "concern": "bullying"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["advice"].as_str().unwrap().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_options_lists_selectors() {
        let (status, body) = send(
            build_router(test_state(ok_stub())),
            get_request("/api/v1/advice/options"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["age_groups"],
            json!(["Child", "Teenager", "Young Adult", "Middle-aged", "Senior"])
        );
        assert_eq!(body["models"].as_array().unwrap().len(), 3);
        assert_eq!(body["default_model"], "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn test_references_verbatim() {
        let (status, body) = send(
            build_router(test_state(ok_stub())),
            get_request("/api/v1/references"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["spiritual"][1]["tradition"], "Quran");
        assert_eq!(body["quotes"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) =
            send(build_router(test_state(ok_stub())), get_request("/api/v1/nothing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

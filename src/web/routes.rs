//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/init", get(handlers::init))
        .route("/seed", post(handlers::seed))
        .route("/search", get(handlers::search))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::search::memory::MemoryBackend;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> (Arc<MemoryBackend>, Router) {
        let backend = Arc::new(MemoryBackend::new());
        let state = AppState::with_backend(&Settings::default(), backend.clone());
        (backend, create_router(state))
    }

    async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_init_reports_index() {
        let (backend, app) = app();
        let (status, body) = call(&app, Method::GET, "/init").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["index"], "articles_index");
        assert!(backend.has_index("articles_index"));

        call(&app, Method::GET, "/init").await;
        assert_eq!(backend.create_calls(), 1);
    }

    #[tokio::test]
    async fn test_seed_requires_post() {
        let (_, app) = app();
        let (status, _) = call(&app, Method::GET, "/seed").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, body) = call(&app, Method::POST, "/seed").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["indexed"], 5);
    }

    #[tokio::test]
    async fn test_search_after_seed_filters_articles() {
        let (_, app) = app();
        call(&app, Method::POST, "/seed").await;

        // "поиск" appears in the article's title and content only
        let uri = "/search?q=%D0%BF%D0%BE%D0%B8%D1%81%D0%BA&content_type=article";
        let (status, body) = call(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK);

        let hits = body.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["title"], "Статья о поиске");
        assert_eq!(hits[0]["snippet"].as_str().unwrap().chars().count(), 50);
    }

    #[tokio::test]
    async fn test_search_without_filter() {
        let (_, app) = app();
        call(&app, Method::POST, "/seed").await;

        // "как" is in one faq title and in the blog content
        let uri = "/search?q=%D0%BA%D0%B0%D0%BA&content_type=";
        let (status, body) = call(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["title"], "Как пользоваться приложением");
    }

    #[tokio::test]
    async fn test_search_repeated_q_uses_last_value() {
        let (_, app) = app();
        call(&app, Method::POST, "/seed").await;

        let uri = "/search?q=zzz&q=%D0%BF%D0%B0%D1%80%D0%BE%D0%BB%D1%8F";
        let (status, body) = call(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK);
        let hits = body.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["title"], "FAQ: учетная запись");
    }

    #[tokio::test]
    async fn test_search_repeated_empty_q_is_json_error() {
        let (_, app) = app();
        let (status, body) = call(&app, Method::GET, "/search?q=a&q=").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_search_rejects_unknown_content_type() {
        let (_, app) = app();
        let (status, body) = call(&app, Method::GET, "/search?q=x&content_type=video").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["detail"],
            "content_type must be one of ['article', 'blog', 'news', 'faq']"
        );
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let (_, app) = app();
        let (status, _) = call(&app, Method::GET, "/search").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = call(&app, Method::GET, "/search?q=").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unreachable_cluster_is_bad_gateway() {
        let mut settings = Settings::default();
        settings.opensearch.use_ssl = false;
        settings.opensearch.port = 1;
        let app = create_router(AppState::new(&settings).unwrap());

        let (status, body) = call(&app, Method::GET, "/init").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["detail"].as_str().unwrap().starts_with("search backend error"));
    }

    #[tokio::test]
    async fn test_health() {
        let (_, app) = app();
        let (status, body) = call(&app, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], crate::VERSION);
    }
}

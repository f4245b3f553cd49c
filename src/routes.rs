use axum::{
    routing::{any, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", any(handlers::home))
        .route("/recognize-move", post(handlers::recognize_move))
        // Unmatched paths get the greeting too
        .fallback(handlers::home)
}

/// Full application with middleware and state attached
pub fn build_app(state: AppState) -> Router {
    create_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        build_app(AppState::new(&Config::default()))
    }

    async fn send(method: &str, uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn home_greets_for_any_method() {
        for method in ["GET", "POST", "PUT", "DELETE", "PATCH"] {
            let (status, body) = send(method, "/").await;
            assert_eq!(status, StatusCode::OK, "method {}", method);
            assert_eq!(body, "Hello from Say Chess!");
        }
    }

    #[tokio::test]
    async fn home_is_plain_text() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_home() {
        let (status, body) = send("GET", "/favicon.ico").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello from Say Chess!");
    }

    #[tokio::test]
    async fn recognize_move_is_post_only() {
        let (status, _) = send("GET", "/recognize-move").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn cors_preflight_is_allowed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/recognize-move")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}

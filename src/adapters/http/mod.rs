//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] assembles the goal routes with the cross-cutting layers
//! driven by [`ServerConfig`].

pub mod goal;

pub use goal::{goal_router, GoalAppState};

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the complete application router with middleware layers applied.
pub fn app_router(state: GoalAppState, server: &ServerConfig) -> Router {
    goal_router()
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy from the configured origins; none configured allows any origin.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::memory::InMemoryGoalRepository;
    use crate::application::GoalDecomposer;

    fn state() -> GoalAppState {
        GoalAppState::new(
            Arc::new(InMemoryGoalRepository::new()),
            Arc::new(GoalDecomposer::local()),
        )
    }

    fn health_from(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn any_origin_allowed_without_configuration() {
        let app = app_router(state(), &ServerConfig::default());

        let response = app.oneshot(health_from("http://example.com")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn configured_origins_are_enforced() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:3000".to_string()),
            ..Default::default()
        };

        let allowed = app_router(state(), &server)
            .oneshot(health_from("http://localhost:3000"))
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );

        let denied = app_router(state(), &server)
            .oneshot(health_from("http://evil.example"))
            .await
            .unwrap();
        assert!(denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}

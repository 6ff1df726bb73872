//! Route definitions and middleware stack

use crate::config::ServerConfig;
use crate::handlers::{generate_project, health_check, list_databases, ErrorBody};
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone, Default)]
pub struct AppState {
    /// Expected static bearer credential; `None` disables the check
    pub auth_token: Option<String>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            auth_token: config.auth_token.clone(),
        }
    }
}

/// Static bearer check for the API routes. Pass-through when no token is
/// configured.
async fn require_bearer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Some(expected) = state.auth_token.as_deref() else {
        return next.run(request).await;
    };

    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == expected);

    if authorized {
        next.run(request).await
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                error: "unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}

/// Rewrite the bare 408 produced by the timeout layer so every error
/// response carries the same JSON `{"error": ...}` body.
pub(crate) async fn shape_timeout_response(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorBody {
                error: "request timed out".to_string(),
            }),
        )
            .into_response();
    }
    response
}

/// Build the CORS layer: a single `*` origin mirrors the request (the
/// original generator function's permissive default), anything else is an
/// explicit allow list.
fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let layer = if allowed_origins.len() == 1 && allowed_origins[0] == "*" {
        CorsLayer::new().allow_origin(tower_http::cors::AllowOrigin::mirror_request())
    } else {
        let mut layer = CorsLayer::new();
        for origin in allowed_origins {
            match HeaderValue::from_str(origin) {
                Ok(value) => layer = layer.allow_origin(value),
                Err(_) => tracing::warn!(origin, "invalid CORS origin in config; skipping"),
            }
        }
        layer
    };

    layer
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

/// Create the application router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/generate", post(generate_project))
        .route("/catalog/databases", get(list_databases))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors(&config.allowed_origins))
                .layer(middleware::from_fn(shape_timeout_response))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
        .with_state(state)
}

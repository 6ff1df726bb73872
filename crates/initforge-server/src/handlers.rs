//! Request handlers
//!
//! The generate handler parses the body itself (rather than relying on the
//! `Json` extractor) so that every failure mode produces the same JSON error
//! shape: `{"error": "..."}`.

use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use initforge_core::{generate, DatabaseCatalog, ProjectConfig};
use serde::Serialize;

/// Uniform body reserved for internal faults, matching the original
/// generator's only error message
const GENERIC_FAILURE: &str = "Failed to generate project";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure modes surfaced by the API
#[derive(Debug)]
pub enum ApiError {
    /// Body was not parseable as a `ProjectConfig`
    BadRequest,
    /// Config parsed but failed validation
    Validation(String),
    /// Anything else; details are logged, not exposed
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, "invalid request body".to_string()),
            ApiError::Validation(reason) => (StatusCode::UNPROCESSABLE_ENTITY, reason),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE.to_string(),
            ),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// POST /api/v1/generate: render and archive a project
pub async fn generate_project(body: Bytes) -> Result<Response, ApiError> {
    let config: ProjectConfig = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected unparseable request body");
        ApiError::BadRequest
    })?;

    let generated = generate(&config).map_err(|e| {
        if e.is_client_error() {
            tracing::info!(error = %e, "rejected invalid project config");
            ApiError::Validation(e.to_string())
        } else {
            tracing::error!(error = %e, "project generation failed");
            ApiError::Internal
        }
    })?;

    let disposition = format!("attachment; filename=\"{}\"", generated.file_name);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        generated.bytes,
    )
        .into_response())
}

/// GET /api/v1/catalog/databases: the built-in catalog for wizard collectors
pub async fn list_databases() -> Json<&'static DatabaseCatalog> {
    Json(DatabaseCatalog::builtin())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health: liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

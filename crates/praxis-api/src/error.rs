use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
///
/// Serialized as `{kind, message}` so callers can branch on the kind without
/// parsing prose. Internal detail never leaks to the response body.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// A lifecycle transition attempted from the wrong state, including a
    /// lost conditional-write race.
    InvalidState(String),
    /// A guard failed on an otherwise-valid transition (e.g. finalizing an
    /// empty report).
    PreconditionFailed(String),
    /// The AI collaborator failed or timed out; the caller may re-invoke
    /// generation manually.
    UpstreamFailure(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    kind: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::InvalidState(msg) => (StatusCode::CONFLICT, "invalid_state", msg),
            ApiError::PreconditionFailed(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "precondition_failed",
                msg,
            ),
            ApiError::UpstreamFailure(msg) => {
                tracing::warn!("upstream failure: {msg}");
                (StatusCode::BAD_GATEWAY, "upstream_failure", msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { kind, message })).into_response()
    }
}

impl From<praxis_storage::error::StorageError> for ApiError {
    fn from(e: praxis_storage::error::StorageError) -> Self {
        match e {
            praxis_storage::error::StorageError::NotFound { key } => {
                ApiError::NotFound(format!("object not found: {key}"))
            }
            praxis_storage::error::StorageError::PreconditionFailed { key } => {
                ApiError::InvalidState(format!(
                    "{key} was modified concurrently; reload and retry"
                ))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<praxis_core::error::LifecycleError> for ApiError {
    fn from(e: praxis_core::error::LifecycleError) -> Self {
        match e {
            praxis_core::error::LifecycleError::InvalidState(msg) => ApiError::InvalidState(msg),
            praxis_core::error::LifecycleError::PreconditionFailed(msg) => {
                ApiError::PreconditionFailed(msg)
            }
        }
    }
}

impl From<praxis_storage::reports::ReportStoreError> for ApiError {
    fn from(e: praxis_storage::reports::ReportStoreError) -> Self {
        match e {
            praxis_storage::reports::ReportStoreError::Storage(e) => e.into(),
            praxis_storage::reports::ReportStoreError::Lifecycle(e) => e.into(),
        }
    }
}

impl From<praxis_bedrock::error::BedrockError> for ApiError {
    fn from(e: praxis_bedrock::error::BedrockError) -> Self {
        ApiError::UpstreamFailure(e.to_string())
    }
}

impl From<praxis_export::error::ExportError> for ApiError {
    fn from(e: praxis_export::error::ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

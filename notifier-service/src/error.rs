use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for notifier-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
///
/// Upstream failures surface to the delivery platform as failed invocations
/// so its own retry policy applies; nothing is retried here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Event payload is structurally valid but unusable
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record store fetch failed
    #[error("Record store error: {0}")]
    RecordStore(String),

    /// Push delivery call failed
    #[error("Push delivery error: {0}")]
    PushDelivery(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::RecordStore(_) | AppError::PushDelivery(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

impl From<firestore_rest::FirestoreError> for AppError {
    fn from(err: firestore_rest::FirestoreError) -> Self {
        AppError::RecordStore(err.to_string())
    }
}

impl From<fcm_shared::FcmError> for AppError {
    fn from(err: fcm_shared::FcmError) -> Self {
        AppError::PushDelivery(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

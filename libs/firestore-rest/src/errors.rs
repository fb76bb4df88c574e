use gcp_auth::AuthError;
use thiserror::Error;

/// Firestore client error types
#[derive(Error, Debug)]
pub enum FirestoreError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Firestore request failed: {0}")]
    Request(String),

    #[error("Firestore API error: {0} - {1}")]
    Api(String, String),

    #[error("Failed to parse Firestore response: {0}")]
    Parse(String),
}

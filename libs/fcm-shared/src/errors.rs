use gcp_auth::AuthError;
use thiserror::Error;

/// FCM client error types
#[derive(Error, Debug)]
pub enum FcmError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("FCM send request failed: {0}")]
    Request(String),

    #[error("FCM API error: {0} - {1}")]
    Api(String, String),

    #[error("Failed to parse FCM response: {0}")]
    Parse(String),
}

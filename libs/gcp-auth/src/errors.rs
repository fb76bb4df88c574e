use thiserror::Error;

/// Authentication error types
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to read service account key: {0}")]
    KeyRead(String),

    #[error("Failed to parse service account key: {0}")]
    KeyParse(String),

    #[error("Failed to parse private key: {0}")]
    PrivateKey(String),

    #[error("Failed to encode JWT assertion: {0}")]
    JwtEncode(String),

    #[error("Token request failed: {0}")]
    TokenRequest(String),

    #[error("Token request failed with status: {0}")]
    TokenStatus(String),

    #[error("Failed to parse token response: {0}")]
    TokenParse(String),
}

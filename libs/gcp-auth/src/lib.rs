/// Google Service Account Authentication
///
/// This library provides OAuth2 access tokens for Google Cloud APIs from a
/// service account key. It handles:
/// - RS256 JWT assertion signing
/// - JWT-bearer token exchange
/// - In-process token caching with early refresh

pub mod errors;
pub mod models;
pub mod token;

pub use errors::AuthError;
pub use models::ServiceAccountKey;
pub use token::TokenProvider;

/// Scope covering both Firestore reads and FCM sends.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

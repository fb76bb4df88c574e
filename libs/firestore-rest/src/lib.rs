/// Firestore REST Client
///
/// Read-only access to Firestore documents over the REST API. Documents come
/// back in Firestore's typed value envelope; this library decodes them into
/// plain `serde_json::Value` maps so callers see ordinary JSON.

pub mod client;
pub mod errors;
pub mod value;

pub use client::FirestoreClient;
pub use errors::FirestoreError;

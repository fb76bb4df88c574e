/// Firebase Cloud Messaging Client
///
/// FCM HTTP v1 client for web and mobile push delivery. Users are addressed
/// through their per-user topic (`user-{userId}`), so no device token state
/// is kept anywhere in the process.

pub mod client;
pub mod errors;
pub mod models;

pub use client::FcmClient;
pub use errors::FcmError;
pub use models::{FcmMessage, FcmNotification, FcmSendResult};

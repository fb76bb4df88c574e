pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod notifiers;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
pub use notifiers::{CommentNotifier, LikeNotifier};
pub use services::{NotificationSender, RecordStore};

use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::error::AppError;
use crate::metrics;
use crate::models::{CommentCreateEvent, DispatchOutcome, PostUpdateEvent};
use crate::notifiers::{CommentNotifier, LikeNotifier};

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Body of a successful event acknowledgment
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    pub dispatched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<&'static str>,
}

impl From<DispatchOutcome> for DispatchResponse {
    fn from(outcome: DispatchOutcome) -> Self {
        match outcome {
            DispatchOutcome::Dispatched => Self {
                dispatched: true,
                skip_reason: None,
            },
            DispatchOutcome::Skipped(reason) => Self {
                dispatched: false,
                skip_reason: Some(reason.as_str()),
            },
        }
    }
}

/// Update delivery for a post record
///
/// POST /api/v1/events/post-updated
pub async fn post_updated(
    notifier: web::Data<Arc<LikeNotifier>>,
    event: web::Json<PostUpdateEvent>,
) -> Result<HttpResponse, AppError> {
    metrics::observe_event("post-updated");

    let outcome = notifier.handle(&event).await.map_err(|e| {
        error!(
            "Like dispatch failed for post {}: {}",
            event.path_params.post_id, e
        );
        e
    })?;

    metrics::observe_outcome("like", &outcome);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(DispatchResponse::from(outcome))))
}

/// Create delivery for a comment record
///
/// POST /api/v1/events/comment-created
pub async fn comment_created(
    notifier: web::Data<Arc<CommentNotifier>>,
    event: web::Json<CommentCreateEvent>,
) -> Result<HttpResponse, AppError> {
    metrics::observe_event("comment-created");

    let outcome = notifier.handle(&event).await.map_err(|e| {
        error!(
            "Comment dispatch failed for post {} comment {}: {}",
            event.path_params.post_id, event.path_params.comment_id, e
        );
        e
    })?;

    metrics::observe_outcome("comment", &outcome);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(DispatchResponse::from(outcome))))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/events")
            .route("/post-updated", web::post().to(post_updated))
            .route("/comment-created", web::post().to(comment_created)),
    );
}

use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::{DispatchOutcome, NotificationRequest, PostUpdateEvent, SkipReason};
use crate::services::NotificationSender;

pub const LIKE_TITLE: &str = "Someone liked your workout 💚";
pub const LIKE_BODY: &str = "Your peaceful workout post got a like!";

/// Notifies the post owner when their post gains a like
///
/// Reacts to update deliveries for `posts/{postId}`. The like counter of the
/// before and after snapshots decides the dispatch; at most one notification
/// per invocation.
pub struct LikeNotifier {
    sender: Arc<dyn NotificationSender>,
}

impl LikeNotifier {
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }

    pub async fn handle(&self, event: &PostUpdateEvent) -> Result<DispatchOutcome> {
        let post_id = &event.path_params.post_id;
        let before = event.before.likes();
        let after = event.after.likes();

        if after <= before {
            debug!(
                "Like count on post {} did not increase ({} -> {}), skipping",
                post_id, before, after
            );
            return Ok(DispatchOutcome::Skipped(SkipReason::LikeCountNotIncreased));
        }

        // An update without an owner cannot be addressed; reject rather than
        // hand the gateway an undefined target.
        let owner_id = event.after.user_id.as_deref().ok_or_else(|| {
            AppError::Validation(format!("post {} has no owner user id", post_id))
        })?;

        self.sender
            .send(NotificationRequest {
                recipient_id: owner_id.to_string(),
                title: LIKE_TITLE.to_string(),
                body: LIKE_BODY.to_string(),
            })
            .await?;

        info!(
            "Dispatched like notification for post {} to user {}",
            post_id, owner_id
        );
        Ok(DispatchOutcome::Dispatched)
    }
}

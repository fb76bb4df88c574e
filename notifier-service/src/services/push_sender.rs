use async_trait::async_trait;
use fcm_shared::FcmClient;
use tracing::info;

use crate::error::Result;
use crate::models::NotificationRequest;

/// Outbound push-messaging gateway, addressed by user id
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver one notification. Failures propagate to the invocation.
    async fn send(&self, request: NotificationRequest) -> Result<()>;
}

/// FCM-backed sender
///
/// Delivers to the recipient's per-user topic, so no device token state is
/// held here or anywhere else in the process.
pub struct FcmPushSender {
    client: FcmClient,
}

impl FcmPushSender {
    pub fn new(client: FcmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationSender for FcmPushSender {
    async fn send(&self, request: NotificationRequest) -> Result<()> {
        let result = self
            .client
            .send_to_user(&request.recipient_id, &request.title, &request.body, None)
            .await?;

        info!(
            "Delivered push to user {}: {}",
            request.recipient_id, result.message_id
        );
        Ok(())
    }
}

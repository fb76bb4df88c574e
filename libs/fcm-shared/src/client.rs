use gcp_auth::TokenProvider;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::FcmError;
use crate::models::*;

/// Firebase Cloud Messaging client
///
/// Sends messages through the FCM HTTP v1 endpoint. Bearer tokens come from
/// the shared [`TokenProvider`].
pub struct FcmClient {
    project_id: String,
    token_provider: Arc<TokenProvider>,
    http_client: reqwest::Client,
}

impl FcmClient {
    pub fn new(project_id: String, token_provider: Arc<TokenProvider>) -> Self {
        Self {
            project_id,
            token_provider,
            http_client: reqwest::Client::new(),
        }
    }

    /// Send a notification to a user via their per-user topic.
    pub async fn send_to_user(
        &self,
        user_id: &str,
        title: &str,
        body: &str,
        data: Option<serde_json::Value>,
    ) -> Result<FcmSendResult, FcmError> {
        self.send_to_topic(&user_topic(user_id), title, body, data)
            .await
    }

    /// Send a notification to a topic.
    pub async fn send_to_topic(
        &self,
        topic: &str,
        title: &str,
        body: &str,
        data: Option<serde_json::Value>,
    ) -> Result<FcmSendResult, FcmError> {
        let access_token = self.token_provider.access_token().await?;

        let message = FcmMessage {
            message: FcmMessageContent {
                token: None,
                topic: Some(topic.to_string()),
                notification: FcmNotification {
                    title: title.to_string(),
                    body: body.to_string(),
                },
                data,
            },
        };

        let url = format!(
            "https://fcm.googleapis.com/v1/projects/{}/messages:send",
            self.project_id
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(&message)
            .send()
            .await
            .map_err(|e| FcmError::Request(e.to_string()))?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let fcm_response: FcmApiResponse = response
                    .json()
                    .await
                    .map_err(|e| FcmError::Parse(e.to_string()))?;

                let message_id = fcm_response
                    .name
                    .unwrap_or_else(|| Uuid::new_v4().to_string());

                tracing::debug!("FCM delivery to {} accepted: {}", topic, message_id);
                Ok(FcmSendResult { message_id })
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());

                Err(FcmError::Api(status.to_string(), error_text))
            }
        }
    }
}

/// Topic every user's browser and app clients subscribe to at registration.
pub fn user_topic(user_id: &str) -> String {
    format!("user-{}", user_id)
}

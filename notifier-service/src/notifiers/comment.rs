use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::{
    CommentCreateEvent, DispatchOutcome, NotificationRequest, Post, SkipReason,
};
use crate::services::{NotificationSender, RecordStore};

pub const COMMENT_TITLE: &str = "New comment on your workout 🌿";

/// Notifies the post owner when someone else comments on their post
///
/// Reacts to create deliveries for `posts/{postId}/comments/{commentId}`.
/// The parent post is fetched to resolve the owner; comments by the owner
/// never produce a notification.
pub struct CommentNotifier {
    store: Arc<dyn RecordStore>,
    sender: Arc<dyn NotificationSender>,
}

impl CommentNotifier {
    pub fn new(store: Arc<dyn RecordStore>, sender: Arc<dyn NotificationSender>) -> Self {
        Self { store, sender }
    }

    pub async fn handle(&self, event: &CommentCreateEvent) -> Result<DispatchOutcome> {
        let post_id = &event.path_params.post_id;
        let comment = &event.data;

        let Some(data) = self.store.get("posts", post_id).await? else {
            debug!("Parent post {} does not exist, skipping", post_id);
            return Ok(DispatchOutcome::Skipped(SkipReason::MissingPost));
        };

        let post: Post = serde_json::from_value(data)
            .map_err(|e| AppError::Internal(format!("post {} is malformed: {}", post_id, e)))?;

        let owner_id = post.user_id.ok_or_else(|| {
            AppError::Validation(format!("post {} has no owner user id", post_id))
        })?;

        if comment.user_id == owner_id {
            debug!("Comment on post {} is by its owner, skipping", post_id);
            return Ok(DispatchOutcome::Skipped(SkipReason::SelfComment));
        }

        let body = format!("{} said: \"{}\"", comment.display_name(), comment.text);
        self.sender
            .send(NotificationRequest {
                recipient_id: owner_id.clone(),
                title: COMMENT_TITLE.to_string(),
                body,
            })
            .await?;

        info!(
            "Dispatched comment notification for post {} to user {}",
            post_id, owner_id
        );
        Ok(DispatchOutcome::Dispatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comment, CommentPathParams};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockStore {
        posts: HashMap<String, Value>,
        fail: bool,
    }

    impl MockStore {
        fn with_post(id: &str, data: Value) -> Arc<Self> {
            let mut posts = HashMap::new();
            posts.insert(id.to_string(), data);
            Arc::new(Self { posts, fail: false })
        }

        fn empty() -> Arc<Self> {
            Arc::new(Self {
                posts: HashMap::new(),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                posts: HashMap::new(),
                fail: true,
            })
        }
    }

    #[async_trait]
    impl RecordStore for MockStore {
        async fn get(&self, _collection: &str, id: &str) -> Result<Option<Value>> {
            if self.fail {
                return Err(AppError::RecordStore("store unavailable".into()));
            }
            Ok(self.posts.get(id).cloned())
        }
    }

    struct MockSender {
        sent: Mutex<Vec<NotificationRequest>>,
    }

    impl MockSender {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
            })
        }

        fn sent(&self) -> Vec<NotificationRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NotificationSender for MockSender {
        async fn send(&self, request: NotificationRequest) -> Result<()> {
            self.sent.lock().unwrap().push(request);
            Ok(())
        }
    }

    fn event(author: &str, name: Option<&str>, text: &str) -> CommentCreateEvent {
        CommentCreateEvent {
            data: Comment {
                user_id: author.to_string(),
                user_name: name.map(str::to_string),
                text: text.to_string(),
            },
            path_params: CommentPathParams {
                post_id: "p1".to_string(),
                comment_id: "c1".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_comment_by_other_user_notifies_owner() {
        let store = MockStore::with_post("p1", json!({ "userId": "u1", "likeCount": 3 }));
        let sender = MockSender::new();
        let notifier = CommentNotifier::new(store, sender.clone());

        let outcome = notifier
            .handle(&event("u2", Some("Sam"), "Great job!"))
            .await
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Dispatched);
        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient_id, "u1");
        assert_eq!(sent[0].title, "New comment on your workout 🌿");
        assert_eq!(sent[0].body, "Sam said: \"Great job!\"");
    }

    #[tokio::test]
    async fn test_anonymous_commenter_gets_default_name() {
        let store = MockStore::with_post("p1", json!({ "userId": "u1" }));
        let sender = MockSender::new();
        let notifier = CommentNotifier::new(store, sender.clone());

        notifier
            .handle(&event("u2", None, "Nice pace"))
            .await
            .unwrap();

        assert_eq!(sender.sent()[0].body, "Someone said: \"Nice pace\"");
    }

    #[tokio::test]
    async fn test_self_comment_is_suppressed() {
        let store = MockStore::with_post("p1", json!({ "userId": "u1" }));
        let sender = MockSender::new();
        let notifier = CommentNotifier::new(store, sender.clone());

        let outcome = notifier
            .handle(&event("u1", Some("Ana"), "note to self"))
            .await
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Skipped(SkipReason::SelfComment));
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_missing_post_is_a_silent_noop() {
        let store = MockStore::empty();
        let sender = MockSender::new();
        let notifier = CommentNotifier::new(store, sender.clone());

        let outcome = notifier
            .handle(&event("u2", Some("Sam"), "Great job!"))
            .await
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Skipped(SkipReason::MissingPost));
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_post_without_owner_is_a_validation_error() {
        let store = MockStore::with_post("p1", json!({ "likeCount": 5 }));
        let sender = MockSender::new();
        let notifier = CommentNotifier::new(store, sender.clone());

        let err = notifier
            .handle(&event("u2", Some("Sam"), "Great job!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = MockStore::failing();
        let sender = MockSender::new();
        let notifier = CommentNotifier::new(store, sender.clone());

        let err = notifier
            .handle(&event("u2", None, "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::RecordStore(_)));
        assert!(sender.sent().is_empty());
    }
}

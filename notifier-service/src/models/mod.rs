use serde::{Deserialize, Serialize};

/// Snapshot of a post document
///
/// Posts are owned and mutated elsewhere in the application; this service
/// only reads before/after snapshots delivered with change events. Fields
/// this service does not use are ignored on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub user_id: Option<String>,
    pub like_count: Option<u64>,
}

impl Post {
    /// Like counter with the documented default: absent means zero.
    pub fn likes(&self) -> u64 {
        self.like_count.unwrap_or(0)
    }
}

/// A comment document, immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub text: String,
}

impl Comment {
    /// Display name with the documented default.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Someone")
    }
}

/// Document-update delivery for a post record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateEvent {
    pub before: Post,
    pub after: Post,
    pub path_params: PostPathParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPathParams {
    pub post_id: String,
}

/// Document-create delivery for a comment record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateEvent {
    pub data: Comment,
    pub path_params: CommentPathParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPathParams {
    pub post_id: String,
    pub comment_id: String,
}

/// A push notification to one user
///
/// Ephemeral: built only when a dispatch precondition holds, handed to the
/// sender, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub recipient_id: String,
    pub title: String,
    pub body: String,
}

/// Outcome of one handler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Exactly one notification was handed to the sender
    Dispatched,
    /// Preconditions not met, nothing was sent
    Skipped(SkipReason),
}

impl DispatchOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Like counter unchanged or decreased
    LikeCountNotIncreased,
    /// Parent post no longer exists
    MissingPost,
    /// Comment author is the post owner
    SelfComment,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::LikeCountNotIncreased => "like_count_not_increased",
            SkipReason::MissingPost => "missing_post",
            SkipReason::SelfComment => "self_comment",
        }
    }
}

pub mod comment;
/// Interaction notifiers, one per change-feed trigger
pub mod like;

pub use comment::CommentNotifier;
pub use like::LikeNotifier;

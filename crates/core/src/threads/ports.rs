//! Port interface for the comment store

use async_trait::async_trait;
use portico_domain::{CommentRecord, NewComment, Result};

/// Trait for reading and appending comment threads
#[async_trait]
pub trait CommentsGateway: Send + Sync {
    /// Fetch the full thread for one ticket or project id, in server order
    async fn list_comments(&self, target_id: &str) -> Result<Vec<CommentRecord>>;

    /// Append one comment to a thread
    async fn create_comment(&self, comment: &NewComment) -> Result<CommentRecord>;
}

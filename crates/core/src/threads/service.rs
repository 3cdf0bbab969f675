//! Comment thread service - core business logic

use std::sync::Arc;

use portico_domain::constants::DEFAULT_COMMENT_MAX_LENGTH;
use portico_domain::{CommentRecord, NewComment, PortalError, Result};

use super::ports::CommentsGateway;

/// Append-only conversation threads, one per ticket or project id
pub struct ThreadService {
    comments: Arc<dyn CommentsGateway>,
    max_length: usize,
}

impl ThreadService {
    /// Create a new thread service
    pub fn new(comments: Arc<dyn CommentsGateway>) -> Self {
        Self { comments, max_length: DEFAULT_COMMENT_MAX_LENGTH }
    }

    /// Override the maximum accepted message length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Loads the whole thread, oldest first.
    ///
    /// No pagination and no caching: the full thread is fetched on every
    /// call, which doubles as the refresh mechanism after posting. Ordering
    /// beyond the server timestamp is whatever the backend assigned.
    pub async fn load_thread(&self, target_id: &str) -> Result<Vec<CommentRecord>> {
        let mut thread = self.comments.list_comments(target_id).await?;
        thread.sort_by_key(|c| c.created_at);
        Ok(thread)
    }

    /// Posts one message to a thread.
    ///
    /// Blank or whitespace-only text is rejected before any network call, as
    /// is text over the configured length. The caller is responsible for
    /// reloading the thread afterwards; no optimistic append happens here.
    pub async fn post_message(
        &self,
        target_id: &str,
        author_name: &str,
        author_role: &str,
        text: &str,
    ) -> Result<CommentRecord> {
        let message = text.trim();
        if message.is_empty() {
            return Err(PortalError::InvalidInput("comment text must not be empty".to_string()));
        }
        if message.len() > self.max_length {
            return Err(PortalError::InvalidInput(format!(
                "comment text exceeds {} characters",
                self.max_length
            )));
        }

        let comment = NewComment {
            target_id: target_id.to_string(),
            author_name: author_name.to_string(),
            author_role: author_role.to_string(),
            message: message.to_string(),
        };
        self.comments.create_comment(&comment).await
    }
}

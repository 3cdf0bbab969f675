//! Comment thread gateway backed by the portal REST API

use std::sync::Arc;

use async_trait::async_trait;
use portico_core::CommentsGateway;
use portico_domain::{CommentRecord, NewComment, Result};

use super::client::PortalClient;

/// Gateway for the comment thread endpoints
pub struct CommentsApi {
    client: Arc<PortalClient>,
}

impl CommentsApi {
    /// Create a gateway over an existing client
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommentsGateway for CommentsApi {
    async fn list_comments(&self, target_id: &str) -> Result<Vec<CommentRecord>> {
        let path = format!("/comments/{}", urlencoding::encode(target_id));
        Ok(self.client.get(&path).await?)
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<CommentRecord> {
        Ok(self.client.post("/comments", comment).await?)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::auth::StaticTokenProvider;
    use super::super::client::PortalClientConfig;
    use super::*;

    fn test_api(server: &MockServer) -> CommentsApi {
        let config = PortalClientConfig { base_url: server.uri(), ..Default::default() };
        let auth = Arc::new(StaticTokenProvider::anonymous());
        let client = PortalClient::new(config, auth).unwrap();
        CommentsApi::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_list_comments_fetches_thread_for_target() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/comments/tkt_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [{
                    "id": "cmt_1",
                    "targetId": "tkt_1",
                    "authorName": "Dana Reyes",
                    "authorRole": "admin",
                    "message": "Looking into it",
                    "createdAt": "2024-03-01T10:00:00Z"
                }]
            })))
            .mount(&mock_server)
            .await;

        let api = test_api(&mock_server);

        let comments = api.list_comments("tkt_1").await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].target_id, "tkt_1");
        assert_eq!(comments[0].message, "Looking into it");
    }

    #[tokio::test]
    async fn test_create_comment_posts_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/comments"))
            .and(body_json(serde_json::json!({
                "targetId": "proj_1",
                "authorName": "Sam Ortiz",
                "authorRole": "client",
                "message": "Any update?"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {
                    "id": "cmt_2",
                    "targetId": "proj_1",
                    "authorName": "Sam Ortiz",
                    "authorRole": "client",
                    "message": "Any update?",
                    "createdAt": "2024-03-02T09:00:00Z"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = test_api(&mock_server);

        let comment = NewComment {
            target_id: "proj_1".to_string(),
            author_name: "Sam Ortiz".to_string(),
            author_role: "client".to_string(),
            message: "Any update?".to_string(),
        };
        let created = api.create_comment(&comment).await.unwrap();
        assert_eq!(created.id, "cmt_2");

        mock_server.verify().await;
    }
}

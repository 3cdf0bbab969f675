//! Integration tests for the admin-only surfaces
//!
//! Site analytics and the user directory are back-office screens; every
//! command checks the viewer role before touching the network.

use portico_app::{
    get_analytics_summary, get_excluded_ips, get_my_ip, list_users, set_excluded_ips, AppContext,
};
use portico_domain::{
    AnalyticsPeriod, ApiConfig, CommentsConfig, Config, ExcludedIps, PortalError, Role, Viewer,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a context wired to a mock portal
fn create_test_context(server: &MockServer, role: Role) -> AppContext {
    let viewer = match role {
        Role::Admin => Viewer {
            id: "usr_admin".to_string(),
            email: "ops@example.com".to_string(),
            name: Some("Ops".to_string()),
            role,
        },
        Role::Client => Viewer {
            id: "usr_client".to_string(),
            email: "dana@example.com".to_string(),
            name: Some("Dana".to_string()),
            role,
        },
    };

    let config = Config {
        api: ApiConfig {
            base_url: server.uri(),
            timeout_seconds: 5,
            token: Some("test-token".to_string()),
        },
        comments: CommentsConfig { max_length: 2000 },
    };

    AppContext::new(config, viewer).expect("failed to create test context")
}

// =============================================================================
// Role gating
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_analytics_commands_refuse_non_admin_viewers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/summary"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/analytics/excluded-ips"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server, Role::Client);

    let err = get_analytics_summary(&ctx, AnalyticsPeriod::Month).await.unwrap_err();
    assert!(matches!(err, PortalError::Auth(_)));

    let err = get_excluded_ips(&ctx).await.unwrap_err();
    assert!(matches!(err, PortalError::Auth(_)));

    let err = get_my_ip(&ctx).await.unwrap_err();
    assert!(matches!(err, PortalError::Auth(_)));

    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_user_directory_refuses_non_admin_viewers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server, Role::Client);

    let err = list_users(&ctx).await.unwrap_err();

    assert!(matches!(err, PortalError::Auth(_)));
    server.verify().await;
}

// =============================================================================
// Analytics
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_summary_is_fetched_for_the_requested_period() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/summary"))
        .and(query_param("period", "week"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "period": "week",
                "totalVisits": 1200,
                "uniqueVisitors": 340,
                "topPages": [{ "path": "/pricing", "count": 98 }],
            },
        })))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server, Role::Admin);

    let summary = get_analytics_summary(&ctx, AnalyticsPeriod::Week)
        .await
        .expect("summary failed");

    assert_eq!(summary.total_visits, 1200);
    assert_eq!(summary.unique_visitors, 340);
    assert_eq!(summary.top_pages[0].path, "/pricing");
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_excluded_ips_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/analytics/excluded-ips"))
        .and(body_json(json!({ "ips": ["203.0.113.7", "198.51.100.4"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "ips": ["203.0.113.7", "198.51.100.4"] },
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/analytics/excluded-ips"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "ips": ["203.0.113.7", "198.51.100.4"] },
        })))
        .mount(&server)
        .await;
    let ctx = create_test_context(&server, Role::Admin);

    let stored = set_excluded_ips(
        &ctx,
        ExcludedIps { ips: vec!["203.0.113.7".to_string(), "198.51.100.4".to_string()] },
    )
    .await
    .expect("set failed");
    assert_eq!(stored.ips.len(), 2);

    let listed = get_excluded_ips(&ctx).await.expect("get failed");
    assert_eq!(listed.ips, stored.ips);
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_my_ip_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/my-ip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "ip": "198.51.100.23" },
        })))
        .mount(&server)
        .await;
    let ctx = create_test_context(&server, Role::Admin);

    let lookup = get_my_ip(&ctx).await.expect("lookup failed");

    assert_eq!(lookup.ip, "198.51.100.23");
}

// =============================================================================
// User directory
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_directory_fetches_fresh_user_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {
                    "id": "usr_1",
                    "name": "Dana Reyes",
                    "email": "dana@example.com",
                    "company": "Reyes LLC",
                    "role": "client",
                    "createdAt": "2024-01-01T00:00:00Z",
                },
                {
                    "id": "usr_2",
                    "name": "Sam Ortiz",
                    "email": "sam@example.com",
                    "role": "admin",
                    "createdAt": "2024-01-02T00:00:00Z",
                },
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server, Role::Admin);

    let users = list_users(&ctx).await.expect("list failed");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].company, "Reyes LLC");
    assert_eq!(users[1].role, "admin");
    server.verify().await;
}

//! Integration tests for selection and deep-link synchronization
//!
//! Selection changes flow machine to URL as [`QueryUpdate`] values; deep
//! links flow URL to machine through `restore_from_query`. These tests drive
//! both directions against a mock portal, including the reload path that
//! clears a selection whose record vanished server-side.

use portico_app::{
    clear_selection, current_selection, load_workspace, restore_from_query, select_record,
    AppContext, QuerySync,
};
use portico_core::apply_query_update;
use portico_domain::{
    ApiConfig, Area, CommentsConfig, Config, PortalError, QueryUpdate, RecordRef, Role, Viewer,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
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

fn ticket(id: &str) -> Value {
    json!({
        "id": id,
        "status": "open",
        "priority": "normal",
        "createdAt": "2024-03-01T09:00:00Z",
        "updatedAt": "2024-03-01T09:00:00Z",
    })
}

async fn mount_collections(server: &MockServer, tickets: Value) {
    Mock::given(method("GET"))
        .and(path("/tickets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": tickets })),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })),
        )
        .mount(server)
        .await;
}

// =============================================================================
// Selection to URL
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_selection_mirrors_into_the_query_string() {
    let server = MockServer::start().await;
    mount_collections(&server, json!([ticket("tkt_1")])).await;
    let ctx = create_test_context(&server, Role::Admin);
    load_workspace(&ctx).await.expect("load failed");

    let update = select_record(&ctx, Area::AdminTickets, "tkt_1").await.expect("select failed");

    assert_eq!(update, QueryUpdate::Set(RecordRef::Ticket("tkt_1".to_string())));
    assert_eq!(apply_query_update("", &update), "ticket=tkt_1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_selecting_by_ticket_number_writes_the_canonical_id() {
    let server = MockServer::start().await;
    let mut numbered = ticket("tkt_42");
    numbered["ticketNumber"] = json!("TKT-0042");
    mount_collections(&server, json!([numbered])).await;
    let ctx = create_test_context(&server, Role::Admin);
    load_workspace(&ctx).await.expect("load failed");

    let update =
        select_record(&ctx, Area::AdminTickets, "TKT-0042").await.expect("select failed");

    // The URL always carries the record id, never the display number
    assert_eq!(update, QueryUpdate::Set(RecordRef::Ticket("tkt_42".to_string())));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_selecting_an_unlisted_id_fails() {
    let server = MockServer::start().await;
    mount_collections(&server, json!([ticket("tkt_1")])).await;
    let ctx = create_test_context(&server, Role::Admin);
    load_workspace(&ctx).await.expect("load failed");

    let err = select_record(&ctx, Area::AdminTickets, "tkt_nope").await.unwrap_err();
    assert!(matches!(err, PortalError::NotFound(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_clearing_removes_the_parameter() {
    let server = MockServer::start().await;
    mount_collections(&server, json!([ticket("tkt_1")])).await;
    let ctx = create_test_context(&server, Role::Admin);
    load_workspace(&ctx).await.expect("load failed");
    select_record(&ctx, Area::AdminTickets, "tkt_1").await.expect("select failed");

    let update = clear_selection(&ctx, Area::AdminTickets).await.expect("clear failed");

    assert_eq!(update, QueryUpdate::Clear);
    assert_eq!(apply_query_update("ticket=tkt_1", &update), "");
    let selected = current_selection(&ctx, Area::AdminTickets).await.expect("selection failed");
    assert!(selected.is_none());
}

// =============================================================================
// URL to selection
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_deep_link_resolves_against_loaded_data() {
    let server = MockServer::start().await;
    mount_collections(&server, json!([ticket("tkt_1"), ticket("tkt_2")])).await;
    let ctx = create_test_context(&server, Role::Admin);
    load_workspace(&ctx).await.expect("load failed");

    let selected = restore_from_query(&ctx, Area::AdminTickets, "?ticket=tkt_2")
        .await
        .expect("restore failed");

    assert_eq!(selected.map(|t| t.id), Some("tkt_2".to_string()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_deep_link_opened_before_the_first_load_waits_for_it() {
    let server = MockServer::start().await;
    mount_collections(&server, json!([ticket("tkt_1"), ticket("tkt_2")])).await;
    let ctx = create_test_context(&server, Role::Admin);

    // Nothing is loaded yet, so the link cannot resolve
    let selected = restore_from_query(&ctx, Area::AdminTickets, "?ticket=tkt_2")
        .await
        .expect("restore failed");
    assert!(selected.is_none());

    // The load resolves it without any further query change
    let view = load_workspace(&ctx).await.expect("load failed");
    assert!(view.query_updates.is_empty());

    let selected = current_selection(&ctx, Area::AdminTickets).await.expect("selection failed");
    assert_eq!(selected.map(|t| t.id), Some("tkt_2".to_string()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_query_without_a_detail_parameter_closes_the_view() {
    let server = MockServer::start().await;
    mount_collections(&server, json!([ticket("tkt_1")])).await;
    let ctx = create_test_context(&server, Role::Admin);
    load_workspace(&ctx).await.expect("load failed");
    select_record(&ctx, Area::AdminTickets, "tkt_1").await.expect("select failed");

    let selected = restore_from_query(&ctx, Area::AdminTickets, "?tab=settings")
        .await
        .expect("restore failed");

    assert!(selected.is_none());
    let current = current_selection(&ctx, Area::AdminTickets).await.expect("selection failed");
    assert!(current.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_parameter_of_the_wrong_kind_is_treated_as_absent() {
    let server = MockServer::start().await;
    mount_collections(&server, json!([ticket("tkt_1")])).await;
    let ctx = create_test_context(&server, Role::Admin);
    load_workspace(&ctx).await.expect("load failed");
    select_record(&ctx, Area::AdminTickets, "tkt_1").await.expect("select failed");

    // A project parameter means nothing to a ticket area
    let selected = restore_from_query(&ctx, Area::AdminTickets, "?project=proj_1")
        .await
        .expect("restore failed");

    assert!(selected.is_none());
}

// =============================================================================
// Reload reconciliation
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_vanished_record_clears_selection_and_parameter_on_reload() {
    let server = MockServer::start().await;

    // First load sees both tickets; the record is then deleted server-side
    Mock::given(method("GET"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [ticket("tkt_1"), ticket("tkt_2")],
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_collections(&server, json!([ticket("tkt_2")])).await;

    let ctx = create_test_context(&server, Role::Admin);
    load_workspace(&ctx).await.expect("load failed");
    select_record(&ctx, Area::AdminTickets, "tkt_1").await.expect("select failed");

    let view = load_workspace(&ctx).await.expect("reload failed");

    assert_eq!(
        view.query_updates,
        vec![QuerySync { area: Area::AdminTickets, update: QueryUpdate::Clear }]
    );
    let selected = current_selection(&ctx, Area::AdminTickets).await.expect("selection failed");
    assert!(selected.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_surviving_selection_is_refreshed_silently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [ticket("tkt_1")],
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    let mut renamed = ticket("tkt_1");
    renamed["status"] = json!("in-progress");
    mount_collections(&server, json!([renamed])).await;

    let ctx = create_test_context(&server, Role::Admin);
    load_workspace(&ctx).await.expect("load failed");
    select_record(&ctx, Area::AdminTickets, "tkt_1").await.expect("select failed");

    let view = load_workspace(&ctx).await.expect("reload failed");

    // The fresh copy replaces the stale one without touching the URL
    assert!(view.query_updates.is_empty());
    let selected = current_selection(&ctx, Area::AdminTickets)
        .await
        .expect("selection failed")
        .expect("selection was lost");
    assert_eq!(selected.status, "in-progress");
}

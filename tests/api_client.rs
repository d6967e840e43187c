//! CommitClient against a mock server.

#[path = "common/mod.rs"]
mod common;

use common::{commit_json, commits, ok, rejected};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use commit_deck::api::{ApiError, CommitClient};
use commit_deck::model::{CommitId, CommitPatch, NewCommit};

async fn client(server: &MockServer) -> CommitClient {
    CommitClient::new(&server.uri(), None).unwrap()
}

#[tokio::test]
async fn test_list_decodes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commits"))
        .respond_with(ok(json!(commits(3))))
        .expect(1)
        .mount(&server)
        .await;

    let records = client(&server).await.list().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, Some(CommitId::new("c01")));
    assert_eq!(records[0].commit_type, "feat");
    assert_eq!(records[1].project, "api");
    assert_eq!(
        records[2].created_at.as_deref(),
        Some("2024-03-03T10:00:00Z")
    );
}

#[tokio::test]
async fn test_list_without_data_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let records = client(&server).await.list().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_rejected_envelope_carries_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commits"))
        .respond_with(rejected("db down"))
        .mount(&server)
        .await;

    let err = client(&server).await.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref reason) if reason == "db down"));
    assert_eq!(err.to_string(), "db down");
}

#[tokio::test]
async fn test_http_error_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commits"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom\n"))
        .mount(&server)
        .await;

    let err = client(&server).await.list().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500: boom");
}

#[tokio::test]
async fn test_html_response_is_not_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commits"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>proxy error</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let err = client(&server).await.list().await.unwrap_err();
    assert!(matches!(err, ApiError::NotJson { ref content_type, .. } if content_type == "text/html"));
}

#[tokio::test]
async fn test_create_posts_wire_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/commits"))
        .and(body_json(json!({
            "project": "web",
            "lifecycle": "development",
            "action": "add",
            "type": "feat",
            "header": "feat(web): login",
            "description": "login",
        })))
        .respond_with(ok(commit_json(7, "web")))
        .expect(1)
        .mount(&server)
        .await;

    let commit = NewCommit {
        project: "web".to_string(),
        lifecycle: "development".to_string(),
        action: "add".to_string(),
        commit_type: "feat".to_string(),
        header: "feat(web): login".to_string(),
        description: "login".to_string(),
    };
    let record = client(&server).await.create(&commit).await.unwrap();
    assert_eq!(record.id, Some(CommitId::new("c07")));
}

#[tokio::test]
async fn test_create_without_record_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let commit = NewCommit {
        project: "web".to_string(),
        lifecycle: "testing".to_string(),
        action: "fix".to_string(),
        commit_type: "fix".to_string(),
        header: "fix(web): typo".to_string(),
        description: "typo".to_string(),
    };
    let err = client(&server).await.create(&commit).await.unwrap_err();
    assert!(matches!(err, ApiError::MissingData { .. }));
}

#[tokio::test]
async fn test_update_sends_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/commits/c01"))
        .and(body_json(json!({ "header": "feat(web): renamed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let echoed = client(&server)
        .await
        .update(&CommitId::new("c01"), &CommitPatch::header("feat(web): renamed"))
        .await
        .unwrap();
    assert_eq!(echoed, None);
}

#[tokio::test]
async fn test_delete_hits_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/commits/c02"))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .await
        .delete(&CommitId::new("c02"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 1
    let client = CommitClient::new("http://127.0.0.1:1", None).unwrap();
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
}

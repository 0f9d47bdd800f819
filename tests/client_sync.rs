//! Tests driving a real server through the typed `BlogApiClient`, the same
//! path the dashboard's sync loop uses.

use std::sync::Arc;

use blogdesk::client::{BlogApiClient, ClientError};
use blogdesk::config::{ApiConfig, SecureString, UserProfile};
use blogdesk::server::{AuthSettings, BlogServer};
use blogdesk::store::{BlogDraft, SqliteBlogStore};

async fn spawn_server(token: Option<&str>) -> String {
    let store = Arc::new(SqliteBlogStore::open_in_memory().expect("in-memory store"));
    let auth = AuthSettings {
        token: token.map(|t| SecureString::new(t.to_string())),
        profile: UserProfile {
            name: "tester".to_string(),
            email: "tester@example.com".to_string(),
        },
    };
    let mut server = BlogServer::new(store, auth);
    let addr = server.try_bind("127.0.0.1:0").await.expect("Failed to bind");

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    format!("http://{}", addr)
}

fn api_client(base_url: &str, token: Option<&str>) -> BlogApiClient {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        token: token.map(str::to_string),
        ..ApiConfig::default()
    };
    BlogApiClient::new(&api).expect("client")
}

#[tokio::test]
async fn resync_after_each_mutation_observes_the_authoritative_state() {
    let base = spawn_server(None).await;
    let client = api_client(&base, None);

    assert!(client.list_blogs().await.unwrap().is_empty());

    let created = client.create_blog(&BlogDraft::new("A", "B")).await.unwrap();
    let list = client.list_blogs().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], created);

    let updated = client
        .update_blog(created.id, &BlogDraft::new("A2", "B"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    let list = client.list_blogs().await.unwrap();
    assert_eq!(list[0].title, "A2");

    client.delete_blog(created.id).await.unwrap();
    assert!(client.list_blogs().await.unwrap().is_empty());
}

#[tokio::test]
async fn server_side_validation_surfaces_as_a_status_error() {
    let base = spawn_server(None).await;
    let client = api_client(&base, None);

    let err = client
        .create_blog(&BlogDraft::new("", "body"))
        .await
        .unwrap_err();
    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 422);
            assert!(message.contains("title"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn deleting_an_unknown_id_is_a_404_status_error() {
    let base = spawn_server(None).await;
    let client = api_client(&base, None);

    let err = client.delete_blog(12345).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 404, .. }));
}

#[tokio::test]
async fn user_endpoint_accepts_the_configured_token() {
    let base = spawn_server(Some("sekrit")).await;

    let authed = api_client(&base, Some("sekrit"));
    let profile = authed.current_user().await.unwrap();
    assert_eq!(profile.name, "tester");
    assert_eq!(profile.email, "tester@example.com");
}

#[tokio::test]
async fn user_endpoint_rejects_bad_or_missing_tokens() {
    let base = spawn_server(Some("sekrit")).await;

    let wrong = api_client(&base, Some("other"));
    let err = wrong.current_user().await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 401, .. }));

    let anonymous = api_client(&base, None);
    let err = anonymous.current_user().await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 401, .. }));
}

#[tokio::test]
async fn transport_failures_are_distinguishable_from_responses() {
    // Nothing is listening here.
    let client = api_client("http://127.0.0.1:9", None);
    let err = client.list_blogs().await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Transport(_) | ClientError::Timeout { .. }
    ));
}

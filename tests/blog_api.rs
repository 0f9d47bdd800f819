//! End-to-end tests for the `/api/blogs` resource endpoint.

use std::sync::Arc;

use blogdesk::config::{SecureString, UserProfile};
use blogdesk::server::{AuthSettings, BlogServer};
use blogdesk::store::SqliteBlogStore;
use reqwest::Client;
use serde_json::{json, Value};

async fn spawn_server() -> String {
    let store = Arc::new(SqliteBlogStore::open_in_memory().expect("in-memory store"));
    let auth = AuthSettings {
        token: Some(SecureString::new("test-token".to_string())),
        profile: UserProfile::default(),
    };
    let mut server = BlogServer::new(store, auth);
    let addr = server.try_bind("127.0.0.1:0").await.expect("Failed to bind");

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    format!("http://{}", addr)
}

#[tokio::test]
async fn full_crud_scenario() {
    let base = spawn_server().await;
    let client = Client::new();

    // create("A","B") → list shows exactly that record
    let created: Value = client
        .post(format!("{base}/api/blogs"))
        .json(&json!({"title": "A", "content": "B"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["title"], "A");
    assert_eq!(created["content"], "B");

    let list: Vec<Value> = client
        .get(format!("{base}/api/blogs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"].as_i64().unwrap(), id);
    assert_eq!(list[0]["title"], "A");
    assert_eq!(list[0]["content"], "B");

    // update(id,"A2","B") → same id, new title
    let updated: Value = client
        .put(format!("{base}/api/blogs/{id}"))
        .json(&json!({"title": "A2", "content": "B"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["id"].as_i64().unwrap(), id);
    assert_eq!(updated["title"], "A2");

    let list: Vec<Value> = client
        .get(format!("{base}/api/blogs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "A2");

    // delete(id) → empty list
    let resp = client
        .delete(format!("{base}/api/blogs/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 204);

    let list: Vec<Value> = client
        .get(format!("{base}/api/blogs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn create_returns_201_and_assigns_unique_ids() {
    let base = spawn_server().await;
    let client = Client::new();

    let first = client
        .post(format!("{base}/api/blogs"))
        .json(&json!({"title": "one", "content": "1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status().as_u16(), 201);
    let first: Value = first.json().await.unwrap();

    let second: Value = client
        .post(format!("{base}/api/blogs"))
        .json(&json!({"title": "two", "content": "2"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_ne!(first["id"].as_i64(), second["id"].as_i64());
}

#[tokio::test]
async fn validation_failures_are_422_with_error_envelope() {
    let base = spawn_server().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/api/blogs"))
        .json(&json!({"title": "", "content": "body"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "validation_error");
    assert!(body["error"]["request_id"].as_str().is_some());

    // Nothing was persisted.
    let list: Vec<Value> = client
        .get(format!("{base}/api/blogs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn unknown_ids_are_404() {
    let base = spawn_server().await;
    let client = Client::new();

    let resp = client
        .put(format!("{base}/api/blogs/999"))
        .json(&json!({"title": "t", "content": "c"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "not_found");

    let resp = client
        .get(format!("{base}/api/blogs/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn deleting_twice_is_404_the_second_time() {
    let base = spawn_server().await;
    let client = Client::new();

    let created: Value = client
        .post(format!("{base}/api/blogs"))
        .json(&json!({"title": "A", "content": "B"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let first = client
        .delete(format!("{base}/api/blogs/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status().as_u16(), 204);

    let second = client
        .delete(format!("{base}/api/blogs/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status().as_u16(), 404);
}

#[tokio::test]
async fn update_refreshes_updated_at_only() {
    let base = spawn_server().await;
    let client = Client::new();

    let created: Value = client
        .post(format!("{base}/api/blogs"))
        .json(&json!({"title": "A", "content": "B"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let updated: Value = client
        .put(format!("{base}/api/blogs/{id}"))
        .json(&json!({"title": "A2", "content": "B"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(updated["created_at"], created["created_at"]);

    let before = chrono::DateTime::parse_from_rfc3339(created["updated_at"].as_str().unwrap());
    let after = chrono::DateTime::parse_from_rfc3339(updated["updated_at"].as_str().unwrap());
    assert!(after.unwrap() >= before.unwrap());
}

#[tokio::test]
async fn health_endpoint_reports_the_service() {
    let base = spawn_server().await;
    let resp = Client::new()
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "blogdesk");
}

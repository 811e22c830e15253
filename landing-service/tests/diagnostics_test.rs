mod common;

use common::TestApp;
use mongodb::bson::doc;

#[tokio::test]
async fn root_returns_greeting() {
    let (app, _store) = TestApp::spawn_with_memory().await;

    let response = app.get("/").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Hello from the Landing API backend!");
}

#[tokio::test]
async fn hello_returns_greeting() {
    let app = TestApp::spawn_degraded().await;

    let response = app.get("/api/hello").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Hello from the backend API!");
}

#[tokio::test]
async fn test_endpoint_lists_collections_when_store_works() {
    let (app, store) = TestApp::spawn_with_memory().await;
    store
        .seed("blogpost", doc! { "title": "Hello", "body": "World" })
        .unwrap();
    store
        .seed("contactmessage", doc! { "name": "Ada" })
        .unwrap();

    let response = app.get("/test").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");

    let collections: Vec<&str> = body["collections"]
        .as_array()
        .expect("collections array")
        .iter()
        .filter_map(|c| c.as_str())
        .collect();
    assert!(collections.contains(&"blogpost"));
    assert!(collections.contains(&"contactmessage"));
}

#[tokio::test]
async fn test_endpoint_lists_at_most_ten_collections() {
    let (app, store) = TestApp::spawn_with_memory().await;
    for i in 0..12 {
        store
            .seed(&format!("collection_{:02}", i), doc! { "n": i })
            .unwrap();
    }

    let body: serde_json::Value = app.get("/test").await.json().await.unwrap();
    assert_eq!(body["collections"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_endpoint_reports_missing_database() {
    let app = TestApp::spawn_degraded().await;

    let response = app.get("/test").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn test_endpoint_truncates_store_errors() {
    let reason = "server selection timed out after 1000ms while looking for a primary";
    let app = TestApp::spawn_failing(reason).await;

    let response = app.get("/test").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let expected: String = reason.chars().take(50).collect();
    assert_eq!(
        body["database"],
        format!("⚠️  Connected but Error: {}", expected)
    );
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn_degraded().await;

    let response = app.get("/health").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "landing-service");
}

#[tokio::test]
async fn readiness_follows_store_reachability() {
    let (app, _store) = TestApp::spawn_with_memory().await;
    assert_eq!(app.get("/ready").await.status().as_u16(), 200);

    let app = TestApp::spawn_degraded().await;
    assert_eq!(app.get("/ready").await.status().as_u16(), 503);

    let app = TestApp::spawn_failing("unreachable").await;
    assert_eq!(app.get("/ready").await.status().as_u16(), 503);
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = TestApp::spawn_degraded().await;

    let response = app
        .client
        .get(format!("{}/api/hello", app.address))
        .header("x-request-id", "landing-req-1")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-request-id"], "landing-req-1");
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
}

#[tokio::test]
async fn metrics_endpoint_returns_text() {
    let app = TestApp::spawn_degraded().await;

    let response = app.get("/metrics").await;
    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/plain"));
}

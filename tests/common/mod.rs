#![allow(dead_code)]

use std::sync::Once;

use serde_json::{Value, json};
use sqlx::PgPool;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("checklist=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application on a random local port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(test_db_pool: PgPool) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = checklist::app(test_db_pool);

        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}

/// Creates an item through the API and returns its parsed JSON body.
pub async fn create_item(client: &reqwest::Client, address: &str, name: &str) -> Value {
    let response = client
        .post(format!("{address}/items"))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

/// Fetches the full item collection and returns it as a JSON array.
pub async fn list_items(client: &reqwest::Client, address: &str) -> Vec<Value> {
    let response = client
        .get(format!("{address}/items"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.json().await.expect("Failed to parse response")
}

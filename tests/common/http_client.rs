//! HTTP client utilities for testing.
//!
//! Helpers for starting an apparent server on an ephemeral port and talking to it.

use reqwest::{Client, Response, Url};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use apparent::{build_router, AppState, Config};

/// Default timeout for HTTP requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Start a server with `config` on 127.0.0.1 and an OS-assigned port
pub async fn spawn_server(config: Config) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local address");

    let app = build_router(Arc::new(AppState::new(config)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    addr
}

/// Create a default test client
pub fn create_test_client() -> Client {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .expect("Failed to build test HTTP client")
}

/// Build a URL for an apparent server endpoint
pub fn build_url(addr: &SocketAddr, path: &str) -> Url {
    format!("http://{}{}", addr, path)
        .parse()
        .expect("Failed to parse URL")
}

/// Make a GET request to the apparent server
pub async fn get(addr: &SocketAddr, path: &str) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    Ok(client.get(build_url(addr, path)).send().await?)
}

/// POST a JSON body to the apparent server
pub async fn post_json(
    addr: &SocketAddr,
    path: &str,
    body: &serde_json::Value,
) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    Ok(client.post(build_url(addr, path)).json(body).send().await?)
}

/// POST a raw body with an explicit content type
pub async fn post_raw(
    addr: &SocketAddr,
    path: &str,
    content_type: &str,
    body: &'static str,
) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    Ok(client
        .post(build_url(addr, path))
        .header(reqwest::header::CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await?)
}

/// POST with no body and no content type
pub async fn post_empty(addr: &SocketAddr, path: &str) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    Ok(client.post(build_url(addr, path)).send().await?)
}

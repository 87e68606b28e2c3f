//! End-to-end tests over a real socket.
//!
//! Each test binds the server on an ephemeral loopback port, talks to it with
//! reqwest, then triggers graceful shutdown through the server handle.

use std::net::SocketAddr;
use std::time::Duration;

use axum_server::Handle;
use reqwest::StatusCode;
use tokio::task::JoinHandle;

use greeter::config::{HEALTH_BODY, INDEX_BODY};
use greeter::create_router;
use greeter::http::{serve, ServerError};

/// A running server and the means to stop it.
struct TestServer {
    addr: SocketAddr,
    handle: Handle,
    task: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    async fn start() -> Self {
        let handle = Handle::new();
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let task = tokio::spawn(serve(create_router(), addr, handle.clone()));

        let addr = handle
            .listening()
            .await
            .expect("server failed to bind an ephemeral port");

        Self { addr, handle, task }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(self) -> Result<(), ServerError> {
        self.handle.graceful_shutdown(Some(Duration::from_secs(5)));
        self.task.await.expect("server task panicked")
    }
}

#[tokio::test]
async fn serves_both_routes_over_http() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let index = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(index.status(), StatusCode::OK);
    assert_eq!(index.text().await.unwrap(), INDEX_BODY);

    let health = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(health.text().await.unwrap(), HEALTH_BODY);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn end_to_end_scenarios() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let missing = client.get(server.url("/nonexistent")).send().await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let post = client.post(server.url("/health")).send().await.unwrap();
    assert_eq!(post.status(), StatusCode::METHOD_NOT_ALLOWED);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_requests_get_identical_bodies() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let requests = (0..16).map(|_| {
        let client = client.clone();
        let url = server.url("/health");
        tokio::spawn(async move {
            let response = client.get(url).send().await.unwrap();
            (response.status(), response.text().await.unwrap())
        })
    });

    for request in requests.collect::<Vec<_>>() {
        let (status, body) = request.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, HEALTH_BODY);
    }

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn second_server_on_same_port_fails_to_bind() {
    let server = TestServer::start().await;

    let result = serve(create_router(), server.addr, Handle::new()).await;
    assert!(matches!(result, Err(ServerError::Bind(_))));

    server.shutdown().await.unwrap();
}

use async_trait::async_trait;
use axum::Router;
use pack_order::app;
use pack_order::domain::{CatalogError, Pack, PackRepository};
use pack_order::{CatalogSource, OrderServer};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let server = OrderServer::new(router, Duration::from_millis(200));
        tokio::spawn(server.serve(listener, async {
            let _ = rx.await;
        }));

        Self {
            base_url: format!("http://{}", address),
            client: reqwest::Client::new(),
            _shutdown: tx,
        }
    }

    async fn with_default_catalog() -> Self {
        Self::start(app::build_router(&CatalogSource::Embedded).unwrap()).await
    }

    async fn post_orders(&self, body: impl Into<reqwest::Body>) -> (u16, String) {
        let response = self
            .client
            .post(format!("{}/orders", self.base_url))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();

        let status = response.status().as_u16();
        (status, response.text().await.unwrap())
    }
}

struct UnavailableRepository;

#[async_trait]
impl PackRepository for UnavailableRepository {
    async fn list_packs(&self) -> Result<Vec<Pack>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused to 10.0.0.7".to_string()))
    }
}

#[tokio::test]
async fn test_create_order_success() {
    let server = TestServer::with_default_catalog().await;

    let response = server
        .client
        .post(format!("{}/orders", server.base_url))
        .json(&json!({ "quantity": 251 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"data":{"rows":[{"quantity":1,"pack":500}]}}"#
    );
}

#[tokio::test]
async fn test_create_order_multiple_rows() {
    let server = TestServer::with_default_catalog().await;

    let (status, body) = server.post_orders(r#"{"quantity": 12001}"#).await;
    assert_eq!(status, 200);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body,
        json!({"data": {"rows": [
            {"quantity": 2, "pack": 5000},
            {"quantity": 1, "pack": 2000},
            {"quantity": 1, "pack": 250}
        ]}})
    );
}

#[tokio::test]
async fn test_invalid_requests_are_bad_requests() {
    let server = TestServer::with_default_catalog().await;
    let zero = json!({"error": "quantity must be greater than zero; got 0: invalid argument"});

    for body in ["", "\"test\"", "{}", r#"{"quantity": "ten"}"#, r#"{"quantity": 1.5}"#, r#"{"quantity": 0}"#] {
        let (status, response) = server.post_orders(body).await;
        assert_eq!(status, 400, "body: {:?}", body);
        assert_eq!(serde_json::from_str::<Value>(&response).unwrap(), zero, "body: {:?}", body);
    }

    let (status, response) = server.post_orders(r#"{"quantity": -5}"#).await;
    assert_eq!(status, 400);
    assert_eq!(
        serde_json::from_str::<Value>(&response).unwrap(),
        json!({"error": "quantity must be greater than zero; got -5: invalid argument"})
    );
}

#[tokio::test]
async fn test_catalog_failure_is_opaque_server_error() {
    let server = TestServer::start(app::router_with_repository(Arc::new(UnavailableRepository))).await;

    let (status, body) = server.post_orders(r#"{"quantity": 10}"#).await;
    assert_eq!(status, 500);
    assert_eq!(body, r#"{"error":"unable to process order"}"#);
    assert!(!body.contains("10.0.0.7"));

    // 無效數量仍然是 400，不會碰到目錄
    let (status, _) = server.post_orders(r#"{"quantity": 0}"#).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_healthz_and_method_not_allowed() {
    let server = TestServer::with_default_catalog().await;

    let response = server
        .client
        .get(format!("{}/healthz", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");

    let response = server
        .client
        .get(format!("{}/orders", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 405);

    let response = server
        .client
        .post(format!("{}/healthz", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 405);
}

#[tokio::test]
async fn test_static_page() {
    let server = TestServer::with_default_catalog().await;

    let response = server.client.get(&server.base_url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(response.text().await.unwrap().contains("/js/index.js"));

    let response = server
        .client
        .get(format!("{}/js/index.js", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("/orders"));
}

#[tokio::test]
async fn test_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"size": 23}}, {{"size": 31}}, {{"size": 53}}]"#).unwrap();

    let router = app::build_router(&CatalogSource::File(file.path().to_path_buf())).unwrap();
    let server = TestServer::start(router).await;

    let (status, body) = server.post_orders(r#"{"quantity": 20}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"data":{"rows":[{"quantity":1,"pack":23}]}}"#);
}

#[tokio::test]
async fn test_empty_catalog_returns_empty_rows() {
    let router = app::build_router(&CatalogSource::Sizes(vec![])).unwrap();
    let server = TestServer::start(router).await;

    let (status, body) = server.post_orders(r#"{"quantity": 46}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"data":{"rows":[]}}"#);
}

#[tokio::test]
async fn test_concurrent_requests() {
    let server = Arc::new(TestServer::with_default_catalog().await);

    let handles: Vec<_> = (1..=20)
        .map(|i| {
            let server = Arc::clone(&server);
            tokio::spawn(async move {
                let quantity = i * 251;
                let (status, body) = server.post_orders(json!({ "quantity": quantity }).to_string()).await;
                (quantity, status, body)
            })
        })
        .collect();

    for handle in handles {
        let (quantity, status, body) = handle.await.unwrap();
        assert_eq!(status, 200);

        let body: Value = serde_json::from_str(&body).unwrap();
        let shipped: u64 = body["data"]["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["quantity"].as_u64().unwrap() * row["pack"].as_u64().unwrap())
            .sum();
        assert_eq!(shipped, (quantity as u64).div_ceil(250) * 250);
    }
}

#[test]
fn test_invalid_catalog_refuses_to_build() {
    assert!(app::build_router(&CatalogSource::Sizes(vec![250, 0])).is_err());
}

// In-process stand-in for the inventory service

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use vehicle_catalog::catalog_api::{self, CatalogClient};

#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
    pub delay: Duration,
}

impl Reply {
    pub fn vehicles(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: json!({ "error": "boom" }),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }
}

#[derive(Default)]
struct Inner {
    list: Option<Reply>,
    search: Option<Reply>,
    searches: Vec<HashMap<String, String>>,
    list_calls: usize,
}

#[derive(Clone, Default)]
pub struct MockCatalog {
    inner: Arc<Mutex<Inner>>,
}

impl MockCatalog {
    pub fn set_list(&self, reply: Reply) {
        self.inner.lock().expect("mock lock").list = Some(reply);
    }

    pub fn set_search(&self, reply: Reply) {
        self.inner.lock().expect("mock lock").search = Some(reply);
    }

    pub fn searches(&self) -> Vec<HashMap<String, String>> {
        self.inner.lock().expect("mock lock").searches.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.inner.lock().expect("mock lock").list_calls
    }
}

async fn respond(reply: Option<Reply>) -> Response {
    let reply = reply.unwrap_or_else(|| Reply::vehicles(json!([])));
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (reply.status, Json(reply.body)).into_response()
}

async fn list_handler(State(mock): State<MockCatalog>) -> Response {
    let reply = {
        let mut inner = mock.inner.lock().expect("mock lock");
        inner.list_calls += 1;
        inner.list.clone()
    };
    respond(reply).await
}

async fn search_handler(
    State(mock): State<MockCatalog>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let reply = {
        let mut inner = mock.inner.lock().expect("mock lock");
        inner.searches.push(params);
        inner.search.clone()
    };
    respond(reply).await
}

/// Starts the mock on an ephemeral port and returns its base URL.
pub async fn start_mock_catalog(mock: MockCatalog) -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/api/catalog/vehicles", get(list_handler))
        .route("/api/catalog/vehicles/search", get(search_handler))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr: SocketAddr = listener.local_addr().expect("listener addr");
    let base_url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock catalog");
    });

    (base_url, handle)
}

// A base URL nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn client_for(base_url: &str) -> CatalogClient {
    let http_client = catalog_api::build_http_client().expect("http client");
    CatalogClient::new(Arc::new(http_client), base_url)
}

pub fn civic() -> Value {
    json!({
        "id": 1,
        "model": "Civic",
        "brand": "Honda",
        "type": "Sedan",
        "fuelType": "Gasoline",
        "basePrice": 24000,
        "isOnSale": false
    })
}

pub fn leaf() -> Value {
    json!({
        "id": 2,
        "model": "Leaf",
        "brand": "Nissan",
        "type": "Hatchback",
        "fuelType": "Electric",
        "basePrice": 28140.5,
        "isOnSale": true
    })
}

pub fn corolla() -> Value {
    json!({
        "id": 3,
        "model": "Corolla",
        "brand": "Toyota",
        "type": "Sedan",
        "fuelType": "Hybrid",
        "basePrice": 22050,
        "isOnSale": false
    })
}

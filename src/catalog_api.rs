// Client for the inventory service's catalog endpoints

use anyhow::{Context, Result};
use reqwest::Client;
use std::sync::Arc;

use crate::{
    error::{FetchError, FetchOp},
    models::Vehicle,
    query::QueryParameters,
};

const VEHICLES_PATH: &str = "/api/catalog/vehicles";
const SEARCH_PATH: &str = "/api/catalog/vehicles/search";

// Shared reqwest client (no timeout, no retries: one attempt per trigger)
pub fn build_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("vehicle_catalog/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build reqwest client")
}

#[derive(Clone)]
pub struct CatalogClient {
    http_client: Arc<Client>,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http_client: Arc<Client>, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // GET /api/catalog/vehicles
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, FetchError> {
        let url = format!("{}{}", self.base_url, VEHICLES_PATH);
        tracing::debug!(url = %url, "Requesting full catalog");
        let request = self.http_client.get(&url);
        send_for_vehicles(request, FetchOp::List).await
    }

    // GET /api/catalog/vehicles/search?criteria=..&value=..
    pub async fn search_vehicles(&self, query: &QueryParameters) -> Result<Vec<Vehicle>, FetchError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        tracing::debug!(url = %url, criteria = %query.criteria, value = %query.value, "Requesting filtered catalog");
        let request = self.http_client.get(&url).query(query);
        send_for_vehicles(request, FetchOp::Search).await
    }
}

// Any non-2xx status is a failure; the body of an error response is ignored
async fn send_for_vehicles(
    request: reqwest::RequestBuilder,
    op: FetchOp,
) -> Result<Vec<Vehicle>, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|source| FetchError::Transport { op, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { op, status });
    }

    let vehicles: Vec<Vehicle> = response
        .json()
        .await
        .map_err(|source| FetchError::Decode { op, source })?;

    tracing::debug!(count = vehicles.len(), "Catalog response decoded");
    Ok(vehicles)
}

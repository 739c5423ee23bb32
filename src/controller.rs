// Fetch controller: issues catalog requests and commits their results

use chrono::Local;
use std::sync::Arc;
use tokio::{sync::RwLock, task::JoinHandle};

use crate::{
    catalog_api::CatalogClient,
    error::FetchError,
    models::{SearchCriterion, Vehicle},
    query::{self, QueryParameters},
    view::{CatalogSnapshot, CatalogView, RequestStatus},
};

/// Handle to the one catalog view. Clones share the same view.
///
/// The lock is taken only to enter loading and to commit; it is never held
/// while a request is outstanding. Every request gets a sequence number and
/// only the latest issued one may commit, so a slow stale response cannot
/// overwrite a newer result.
#[derive(Clone)]
pub struct FetchController {
    client: CatalogClient,
    view: Arc<RwLock<CatalogView>>,
}

impl FetchController {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            view: Arc::new(RwLock::new(CatalogView::default())),
        }
    }

    /// Creates the view in `Loading([])` and starts the initial listing.
    pub fn activate(client: CatalogClient) -> Self {
        let controller = Self::new(client);
        let initial = controller.clone();
        tokio::spawn(async move {
            initial.load_all().await;
        });
        controller
    }

    pub async fn load_all(&self) -> RequestStatus {
        let ticket = self.begin().await;
        self.run_load_all(ticket).await
    }

    pub async fn search(&self, criterion: &SearchCriterion, value: &str) -> RequestStatus {
        let params = query::build_query(criterion, value);
        let ticket = self.begin().await;
        self.run_search(ticket, params).await
    }

    /// Enters loading now and finishes `load_all` on a background task.
    ///
    /// Once this returns, any snapshot shows `Loading` until the request
    /// settles, so the caller can render feedback without waiting.
    pub async fn spawn_load_all(&self) -> JoinHandle<RequestStatus> {
        let ticket = self.begin().await;
        let controller = self.clone();
        tokio::spawn(async move { controller.run_load_all(ticket).await })
    }

    // Same as `spawn_load_all`, for a search
    pub async fn spawn_search(&self, criterion: &SearchCriterion, value: &str) -> JoinHandle<RequestStatus> {
        let params = query::build_query(criterion, value);
        let ticket = self.begin().await;
        let controller = self.clone();
        tokio::spawn(async move { controller.run_search(ticket, params).await })
    }

    async fn run_load_all(&self, ticket: u64) -> RequestStatus {
        tracing::info!(request = ticket, "Loading full catalog");
        let result = self.client.list_vehicles().await;
        self.settle(ticket, result).await
    }

    async fn run_search(&self, ticket: u64, params: QueryParameters) -> RequestStatus {
        tracing::info!(request = ticket, criteria = %params.criteria, value = %params.value, "Searching catalog");
        let result = self.client.search_vehicles(&params).await;
        self.settle(ticket, result).await
    }

    // Remembers what the user picked in the search form; issues nothing
    pub async fn select(&self, criterion: SearchCriterion, value: String) {
        let mut view = self.view.write().await;
        view.criterion = criterion;
        view.search_value = value;
    }

    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.view.read().await.snapshot()
    }

    async fn begin(&self) -> u64 {
        let mut view = self.view.write().await;
        view.latest_request += 1;
        view.state.begin();
        view.latest_request
    }

    async fn settle(&self, ticket: u64, result: Result<Vec<Vehicle>, FetchError>) -> RequestStatus {
        let mut view = self.view.write().await;
        if ticket != view.latest_request {
            tracing::debug!(
                request = ticket,
                latest = view.latest_request,
                ok = result.is_ok(),
                "Discarding response to superseded request"
            );
            return view.state.status();
        }

        match result {
            Ok(vehicles) => {
                tracing::info!(request = ticket, count = vehicles.len(), "Catalog updated");
                view.state.succeed(vehicles);
                view.last_updated = Some(Local::now());
            }
            Err(e) => {
                tracing::warn!(request = ticket, error = %e, "Catalog request failed");
                view.state.fail(e.to_string());
            }
        }
        view.state.status()
    }
}

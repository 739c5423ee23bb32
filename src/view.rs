// Catalog view state: the Idle / Loading / Errored machine and what it shows.
// Records are only ever replaced as a whole; a failure keeps the prior ones.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::models::{SearchCriterion, Vehicle};

/// Lifecycle phase of the most recent catalog request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum RequestStatus {
    Idle,
    Loading,
    Errored(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestStatus::Errored(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle(Vec<Vehicle>),
    Loading(Vec<Vehicle>),
    Errored { message: String, vehicles: Vec<Vehicle> },
}

impl Default for ViewState {
    // Freshly activated view: nothing shown yet, first load in flight
    fn default() -> Self {
        ViewState::Loading(Vec::new())
    }
}

impl ViewState {
    pub fn vehicles(&self) -> &[Vehicle] {
        match self {
            ViewState::Idle(vehicles)
            | ViewState::Loading(vehicles)
            | ViewState::Errored { vehicles, .. } => vehicles,
        }
    }

    pub fn status(&self) -> RequestStatus {
        match self {
            ViewState::Idle(_) => RequestStatus::Idle,
            ViewState::Loading(_) => RequestStatus::Loading,
            ViewState::Errored { message, .. } => RequestStatus::Errored(message.clone()),
        }
    }

    /// Enter `Loading`, dropping any previous error but keeping the records.
    pub fn begin(&mut self) {
        let vehicles = self.take_vehicles();
        *self = ViewState::Loading(vehicles);
    }

    /// Commit a successful response; the old records are discarded.
    pub fn succeed(&mut self, vehicles: Vec<Vehicle>) {
        *self = ViewState::Idle(vehicles);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        let vehicles = self.take_vehicles();
        *self = ViewState::Errored {
            message: message.into(),
            vehicles,
        };
    }

    fn take_vehicles(&mut self) -> Vec<Vehicle> {
        match self {
            ViewState::Idle(vehicles)
            | ViewState::Loading(vehicles)
            | ViewState::Errored { vehicles, .. } => std::mem::take(vehicles),
        }
    }
}

/// Everything the catalog page shows, owned by a single `FetchController`.
#[derive(Debug, Default)]
pub struct CatalogView {
    pub state: ViewState,
    pub criterion: SearchCriterion,
    pub search_value: String,
    pub last_updated: Option<DateTime<Local>>,
    // Sequence number of the latest issued request
    pub latest_request: u64,
}

impl CatalogView {
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            status: self.state.status(),
            vehicles: self.state.vehicles().to_vec(),
            criteria: self.criterion.clone(),
            value: self.search_value.clone(),
            last_updated: self.last_updated,
        }
    }
}

// Read-only copy handed to rendering and the JSON endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub status: RequestStatus,
    pub vehicles: Vec<Vehicle>,
    pub criteria: SearchCriterion,
    pub value: String,
    pub last_updated: Option<DateTime<Local>>,
}

// JSON view of the catalog state, for scripts and headless clients

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::controller::FetchController;

// GET /api/state
pub async fn get_state(State(controller): State<FetchController>) -> impl IntoResponse {
    let snapshot = controller.snapshot().await;
    tracing::debug!(
        "[HANDLER] /api/state - {:?}, {} vehicles",
        snapshot.status,
        snapshot.vehicles.len()
    );
    Json(snapshot)
}

// Route definitions

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::AppState;

mod api;
mod pages;

pub fn create_router(app_state: AppState) -> Router {
    let api_router = Router::new()
        .route("/state", get(api::get_state))
        .with_state(app_state.clone());

    Router::new()
        .route("/", get(pages::catalog_page))
        .route("/search", post(pages::submit_search))
        .route("/reset", post(pages::reset))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

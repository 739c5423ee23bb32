use askama::Template;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect},
};

use crate::{
    controller::FetchController,
    error::{AppError, AppResult},
    models::SearchForm,
    presentation::{self, CriterionOption, VehicleRow},
    AppState,
};

// The catalog page: search bar, error banner and vehicle table
#[derive(Template)]
#[template(path = "catalog.html")]
struct CatalogTemplate {
    rows: Vec<VehicleRow>,
    options: Vec<CriterionOption>,
    search_value: String,
    loading: bool,
    error: Option<String>,
    last_updated: Option<String>,
    catalog_source: String,
}

// GET /
pub async fn catalog_page(
    State(app_state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let snapshot = app_state.controller.snapshot().await;
    let display = presentation::project(&snapshot);

    let template = CatalogTemplate {
        rows: display.rows,
        options: display.options,
        search_value: display.search_value,
        loading: display.loading,
        error: display.error,
        last_updated: display.last_updated,
        catalog_source: app_state.settings.catalog_api_url.clone(),
    };
    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render catalog template: {}", e);
            Err(AppError::InternalServerError(anyhow::Error::new(e).context("Failed to render catalog page")))
        }
    }
}

// POST /search: starts the search and goes straight back to the page,
// which shows "Searching..." and refreshes until the request settles
pub async fn submit_search(
    State(controller): State<FetchController>,
    Form(form): Form<SearchForm>,
) -> impl IntoResponse {
    tracing::info!("[HANDLER] /search - criteria: {}, value: {:?}", form.criteria, form.value);
    controller.select(form.criteria.clone(), form.value.clone()).await;
    let _pending = controller.spawn_search(&form.criteria, &form.value).await;
    Redirect::to("/")
}

// POST /reset: reissues the unfiltered listing in the background
pub async fn reset(State(controller): State<FetchController>) -> impl IntoResponse {
    tracing::info!("[HANDLER] /reset - reloading full catalog");
    let _pending = controller.spawn_load_all().await;
    Redirect::to("/")
}

// Vehicle catalog browser: a local web page over the inventory service

use axum::extract::FromRef;
use std::sync::Arc;

pub mod catalog_api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod presentation;
pub mod query;
pub mod routes;
pub mod view;

use crate::{config::Settings, controller::FetchController};

// Shared by every handler; the controller is the one owner of the view
#[derive(Clone, FromRef)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub controller: FetchController,
}

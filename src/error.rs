// Error types: catalog fetch failures and web surface errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;

// Which catalog request failed; its Display leads every user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOp {
    List,
    Search,
}

impl fmt::Display for FetchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOp::List => f.write_str("Failed to fetch vehicles"),
            FetchOp::Search => f.write_str("Search failed"),
        }
    }
}

/// A catalog request that did not produce a record list.
///
/// The view only ever keeps the `Display` text of this error.
#[derive(Debug, Error)]
pub enum FetchError {
    // Request never completed (connection refused, reset, ...)
    #[error("{op}: could not reach the catalog service ({source})")]
    Transport {
        op: FetchOp,
        #[source]
        source: reqwest::Error,
    },

    #[error("{op} (HTTP {status})")]
    Status {
        op: FetchOp,
        status: reqwest::StatusCode,
    },

    // 2xx, but the body was not a JSON array of vehicles
    #[error("{op}: unexpected response from the catalog service ({source})")]
    Decode {
        op: FetchOp,
        #[source]
        source: reqwest::Error,
    },
}

// Errors of the local web surface itself (not of the catalog service)
#[derive(Debug)]
pub enum AppError {
    InternalServerError(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::InternalServerError(error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(e) => {
                tracing::error!("Internal server error: {:?}", e);
                // Don't expose internal details to the client
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        (status, error_message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

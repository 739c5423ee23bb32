use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vehicle_catalog::{
    catalog_api::{self, CatalogClient},
    config::Settings,
    controller::FetchController,
    routes, AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first. Ignore errors (e.g., file not found)
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "vehicle_catalog=info,tower_http=info".into()))
        .with(fmt::layer())
        .init();

    tracing::info!("Starting vehicle catalog...");

    let settings = match Settings::new() {
        Ok(s) => {
            tracing::info!("Configuration loaded successfully.");
            s
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };
    let settings = Arc::new(settings);

    let http_client = Arc::new(catalog_api::build_http_client()?);
    let client = CatalogClient::new(http_client, settings.catalog_api_url.clone());
    tracing::info!("Catalog service at {}", client.base_url());

    // Activation: the view starts in Loading([]) with the full listing in flight
    let controller = FetchController::activate(client);

    let app_state = AppState {
        settings: settings.clone(),
        controller,
    };
    let app = routes::create_router(app_state);

    let addr: SocketAddr = settings
        .server_address
        .parse()
        .with_context(|| format!("Invalid server address format: {}", settings.server_address))?;

    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => {
            tracing::info!("Catalog page at http://{}", addr);
            l
        }
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

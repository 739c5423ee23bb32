// Application settings, loaded with the 'config' crate (+ .env via dotenv)

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
// The inventory service the catalog talks to (plain HTTP, no auth)
pub const DEFAULT_CATALOG_API_URL: &str = "http://localhost:8084";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    // Where the local catalog page is served
    pub server_address: String,
    // Base URL of the inventory service, without trailing slash
    pub catalog_api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            catalog_api_url: DEFAULT_CATALOG_API_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let builder = Config::builder()
            .set_default("server_address", DEFAULT_SERVER_ADDRESS)?
            .set_default("catalog_api_url", DEFAULT_CATALOG_API_URL)?
            // Optional config.toml next to the binary's working directory
            .add_source(File::with_name("config").required(false))
            // e.g. APP_CATALOG_API_URL=http://localhost:9090
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let mut settings: Settings = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        settings.catalog_api_url = settings.catalog_api_url.trim_end_matches('/').to_string();
        Ok(settings)
    }
}

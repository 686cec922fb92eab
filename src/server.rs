//! Server module for Counsel
//!
//! Configuration loading, startup credential check, and the axum runtime.

use anyhow::{Context, Result};
use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Router};
use config::{Config, Environment, File, FileFormat};
use counsel_core::{Advisor, ApiCredential};
use counsel_llm::{OpenAiConfig, OpenAiProvider};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// LLM endpoint configuration. The model is fixed and deliberately absent.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LlmConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Embedded default configuration (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// The single-page front end (compiled into binary)
const INDEX_HTML: &str = include_str!("web/index.html");

/// Load configuration from files and environment
pub(crate) fn load_config() -> Result<AppConfig> {
    let config = Config::builder()
        // 1. Embedded defaults (always available)
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // 2. External overrides (optional)
        .add_source(File::with_name("config/local").required(false))
        // 3. Environment variables (highest priority)
        .add_source(
            Environment::with_prefix("COUNSEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Build the application router
pub(crate) fn build_router(advisor: Arc<Advisor>) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(crate::api::api_router())
        .layer(Extension(advisor))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the server
pub async fn run() -> Result<()> {
    info!("Starting Counsel v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("Failed to load configuration")?;
    info!("Configuration loaded");

    // Fatal by design: without a key there is nothing this app can do.
    let credential = ApiCredential::from_env()
        .context("Counsel cannot start without an API credential")?;
    info!(credential = ?credential, "API credential loaded");

    let mut provider_config = OpenAiConfig::new(credential.expose());
    if let Some(base_url) = &config.llm.base_url {
        provider_config = provider_config.with_base_url(base_url);
    }
    let provider = Arc::new(OpenAiProvider::new(provider_config));
    let advisor = Arc::new(Advisor::new(provider));
    info!(provider = advisor.provider_name(), "Answer provider ready");

    let app = build_router(advisor);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    info!("HTTP server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
    }
}

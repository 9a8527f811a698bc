mod analysis;
mod config;
mod db;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod resumes;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::LlmAnalyzer;
use crate::config::Config;
use crate::db::create_pool;
use crate::extraction::DocumentExtractor;
use crate::llm_client::LlmClient;
use crate::resumes::store::ResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite store
    let store = ResumeStore::new(create_pool(&config.database_url).await?);
    store.initialize().await?;
    info!("Resume table ready");

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Cannot create upload dir {}", config.upload_dir.display()))?;
    info!("Uploads stored in {}", config.upload_dir.display());

    // Initialize LLM client (optional: analysis reports a missing key per upload)
    let llm = config.google_api_key.clone().map(|key| {
        LlmClient::new(
            key,
            config.gemini_model.clone(),
            config.gemini_api_base.clone(),
        )
    });
    match &llm {
        Some(llm) => info!("LLM client initialized (model: {})", llm.model()),
        None => warn!("GOOGLE_API_KEY not set; uploads will be stored without analysis"),
    }

    let state = AppState {
        store,
        upload_dir: config.upload_dir.clone(),
        extractor: Arc::new(DocumentExtractor),
        analyzer: Arc::new(LlmAnalyzer::new(llm)),
    };

    // CORS allows any origin
    let app = build_router(state, config.max_upload_bytes).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

mod catalog;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::{JobCatalog, StaticCatalog};
use crate::config::Config;
use crate::matching::engine::MatchEngine;
use crate::matching::taxonomy::SkillTaxonomy;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Skill taxonomy: built once, read-only for the process lifetime
    let taxonomy = match &config.skill_taxonomy_path {
        Some(path) => {
            info!("Loading skill taxonomy from {}", path.display());
            SkillTaxonomy::from_json_file(path)?
        }
        None => SkillTaxonomy::default(),
    };

    // Job catalog (StaticCatalog by default; any JobCatalog impl can stand in)
    let catalog: Arc<dyn JobCatalog> = match &config.job_catalog_path {
        Some(path) => Arc::new(StaticCatalog::from_json_file(path)?),
        None => Arc::new(StaticCatalog::default()),
    };
    info!("Job catalog ready ({} postings)", catalog.jobs().await?.len());

    let engine = MatchEngine::new(Arc::new(taxonomy), config.weights);
    info!("Scoring weights: {:?}", engine.weights());

    // Build app state
    let state = AppState { engine, catalog };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

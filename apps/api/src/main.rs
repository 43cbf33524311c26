mod config;
mod errors;
mod extraction;
mod routes;
mod scoring;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::PdfExtractor;
use crate::routes::build_router;
use crate::scoring::analyzer::AtsScorer;
use crate::scoring::taxonomy::SkillTaxonomies;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS Resume Scorer API v{}", env!("CARGO_PKG_VERSION"));

    // Skill taxonomies are built once and never mutated afterwards
    let taxonomies = match &config.skill_taxonomy_path {
        Some(path) => {
            info!("Loading skill taxonomies from {}", path.display());
            SkillTaxonomies::from_json_file(path)
                .with_context(|| format!("Failed to load SKILL_TAXONOMY_PATH={}", path.display()))?
        }
        None => SkillTaxonomies::builtin().context("Built-in skill taxonomies are invalid")?,
    };
    info!(
        "Skill taxonomies ready: {} technical / {} soft categories",
        taxonomies.technical.categories.len(),
        taxonomies.soft.categories.len()
    );

    let state = AppState {
        config: config.clone(),
        scorer: Arc::new(AtsScorer::new(taxonomies)),
        extractor: Arc::new(PdfExtractor),
    };

    // Build router
    // TODO: restrict CORS origins once the frontend host is fixed
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

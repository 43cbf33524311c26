use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::scoring::analyzer::AtsScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable after startup; shared by every request.
    pub scorer: Arc<AtsScorer>,
    /// Pluggable document extractor. Default: PdfExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

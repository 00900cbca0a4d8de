use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::matching::engine::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Scoring engine; owns the read-only taxonomy and integration weights.
    pub engine: MatchEngine,
    /// Pluggable catalog provider. Default: StaticCatalog.
    pub catalog: Arc<dyn JobCatalog>,
}

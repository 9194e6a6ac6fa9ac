use std::sync::Arc;

use crate::config::Config;
use crate::matching::{CompatibilityScorer, MatchEngine};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: `MatchEngine` built from `config.engine`.
    pub scorer: Arc<dyn CompatibilityScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let scorer = Arc::new(MatchEngine::new(config.engine.clone()));
        Self { config, scorer }
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextEnhancer;
use crate::portfolio::store::PortfolioStore;
use crate::render::export::ExportPolicy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: PortfolioStore,
    /// `None` when no API key is configured; enhancement endpoints answer 503.
    pub enhancer: Option<Arc<dyn TextEnhancer>>,
    pub config: Config,
}

impl AppState {
    pub fn export_policy(&self) -> ExportPolicy {
        ExportPolicy::from_megabytes(self.config.export_warning_limit_mb)
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::proposal::template::Letterhead;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// External text generator. `None` when no API key is configured:
    /// every proposal is then rendered from the local template.
    pub llm: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn letterhead(&self) -> Letterhead<'_> {
        Letterhead {
            brand_name: &self.config.brand_name,
            salutation_name: &self.config.salutation_name,
            author_name: &self.config.author_name,
        }
    }
}

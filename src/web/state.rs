//! Application state shared across handlers

use crate::config::Settings;
use crate::opensearch::OpenSearchClient;
use crate::search::{SearchBackend, SearchService};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Search operations bound to the configured index
    pub search: Arc<SearchService>,
}

impl AppState {
    /// Create state talking to the cluster described by `settings`
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = OpenSearchClient::from_settings(&settings.opensearch)?;
        Ok(Self::with_backend(settings, Arc::new(client)))
    }

    /// Create state over an arbitrary backend
    pub fn with_backend(settings: &Settings, backend: Arc<dyn SearchBackend>) -> Self {
        let search = SearchService::new(backend, settings.opensearch.index_name.clone());
        Self {
            search: Arc::new(search),
        }
    }

    /// Name of the index all routes operate on
    pub fn index_name(&self) -> &str {
        self.search.index_name()
    }
}

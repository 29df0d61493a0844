//! Index lifecycle and query operations behind the HTTP routes

use super::traits::SearchBackend;
use crate::documents::{sample_documents, ContentType, SearchHit};
use crate::opensearch::Result;
use std::sync::Arc;
use tracing::info;

/// Runs the facade's operations against a single named index
#[derive(Clone)]
pub struct SearchService {
    backend: Arc<dyn SearchBackend>,
    index: String,
}

impl SearchService {
    pub fn new(backend: Arc<dyn SearchBackend>, index: impl Into<String>) -> Self {
        Self {
            backend,
            index: index.into(),
        }
    }

    pub fn index_name(&self) -> &str {
        &self.index
    }

    /// Create the index if it does not exist yet
    pub async fn ensure_index(&self) -> Result<()> {
        if !self.backend.index_exists(&self.index).await? {
            info!("Creating index {}", self.index);
            self.backend.create_index(&self.index).await?;
        }
        Ok(())
    }

    /// Index the demo corpus, returning how many documents were stored
    pub async fn seed(&self) -> Result<usize> {
        self.ensure_index().await?;

        let mut indexed = 0;
        for doc in sample_documents() {
            self.backend.index_document(&self.index, &doc).await?;
            indexed += 1;
        }

        info!("Seeded {} documents into {}", indexed, self.index);
        Ok(indexed)
    }

    pub async fn search(
        &self,
        query: &str,
        content_type: Option<ContentType>,
    ) -> Result<Vec<SearchHit>> {
        self.ensure_index().await?;
        self.backend.search(&self.index, query, content_type).await
    }
}

//! Backend trait the search service runs against

use crate::documents::{ContentType, Document, SearchHit};
use crate::opensearch::Result;
use async_trait::async_trait;

/// Storage and query operations the service needs from a search engine
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Whether `index` exists
    async fn index_exists(&self, index: &str) -> Result<bool>;

    /// Create `index` with the fixed document mapping
    async fn create_index(&self, index: &str) -> Result<()>;

    /// Store a document so it is immediately searchable
    async fn index_document(&self, index: &str, document: &Document) -> Result<()>;

    /// Full-text search over title and content, optionally restricted to one content type
    async fn search(
        &self,
        index: &str,
        query: &str,
        content_type: Option<ContentType>,
    ) -> Result<Vec<SearchHit>>;
}

//! OpenSearch-Facade: a small HTTP facade over an OpenSearch index
//!
//! Creates the index, seeds a demo corpus and serves keyword search with an
//! optional content type filter. Tokenization and ranking stay in OpenSearch.

pub mod config;
pub mod documents;
pub mod network;
pub mod opensearch;
pub mod search;
pub mod web;

pub use config::Settings;
pub use documents::{ContentType, Document, SearchHit};
pub use opensearch::{OpenSearchClient, OpenSearchError};
pub use search::{SearchBackend, SearchService};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Index used when `INDEX_NAME` is not set
pub const DEFAULT_INDEX_NAME: &str = "articles_index";

/// Default timeout for cluster requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;

//! OpenSearch REST client
//!
//! Thin typed wrapper over the handful of cluster endpoints the facade uses:
//! index existence, index creation, document indexing and search.

mod client;
mod error;
mod query;

pub use client::OpenSearchClient;
pub use error::{OpenSearchError, Result};
pub use query::{index_mapping, search_body, MAX_HITS};

//! Document model
//!
//! The fixed document shape, the content type enum, and the demo corpus.

mod samples;
mod types;

pub use samples::sample_documents;
pub use types::{snippet, ContentType, Document, SearchHit, UnknownContentType, SNIPPET_CHARS};

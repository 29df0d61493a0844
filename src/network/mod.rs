//! HTTP networking module
//!
//! Provides the HTTP client used to reach the OpenSearch cluster.

mod client;
mod request;

pub use client::HttpClient;
pub use request::{HttpMethod, HttpRequest, HttpResponse};

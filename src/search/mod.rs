//! Search service
//!
//! Index lifecycle (ensure, seed) and keyword search, written against the
//! [`SearchBackend`] trait so the HTTP layer never touches the cluster directly.

#[cfg(test)]
pub(crate) mod memory;
mod service;
mod traits;

pub use service::SearchService;
pub use traits::SearchBackend;

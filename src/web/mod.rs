//! Web server module
//!
//! Exposes the init, seed and search routes over HTTP.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

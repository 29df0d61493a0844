//! HTTP error responses

use crate::documents::UnknownContentType;
use crate::opensearch::OpenSearchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors a handler can return. Rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("query parameter 'q' is required and must be at least 1 character")]
    MissingQuery,

    #[error(transparent)]
    InvalidContentType(#[from] UnknownContentType),

    #[error("search backend error: {0}")]
    Upstream(#[from] OpenSearchError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidContentType(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Upstream(ref e) = self {
            tracing::error!("OpenSearch request failed: {}", e);
        }
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

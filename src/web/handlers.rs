//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::documents::{ContentType, SearchHit};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

/// Query parameters for search
#[derive(Debug, Default)]
pub struct SearchParams {
    /// Search query, required and non-empty
    pub q: Option<String>,
    /// Optional exact filter, one of the `ContentType` names
    pub content_type: Option<String>,
}

impl SearchParams {
    /// Collect from raw query pairs. A repeated key keeps its last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => params.q = Some(value),
                "content_type" => params.content_type = Some(value),
                _ => {}
            }
        }
        params
    }

    /// Validate into a query string and an optional content type
    fn validate(self) -> Result<(String, Option<ContentType>), ApiError> {
        let query = match self.q {
            Some(q) if !q.is_empty() => q,
            _ => return Err(ApiError::MissingQuery),
        };

        let content_type = match self.content_type.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<ContentType>()?),
        };

        Ok((query, content_type))
    }
}

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub status: &'static str,
    pub index: String,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub indexed: usize,
}

/// `GET /init`: create the index if it is missing
pub async fn init(State(state): State<AppState>) -> Result<Json<InitResponse>, ApiError> {
    state.search.ensure_index().await?;
    Ok(Json(InitResponse {
        status: "ok",
        index: state.index_name().to_string(),
    }))
}

/// `POST /seed`: load the demo corpus
pub async fn seed(State(state): State<AppState>) -> Result<Json<SeedResponse>, ApiError> {
    let indexed = state.search.seed().await?;
    Ok(Json(SeedResponse { indexed }))
}

/// `GET /search`
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    let (query, content_type) = SearchParams::from_pairs(pairs).validate()?;
    tracing::debug!("search q={:?} content_type={:?}", query, content_type);

    let hits = state.search.search(&query, content_type).await?;
    Ok(Json(hits))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

//! Typed calls against the OpenSearch REST API

use super::error::{OpenSearchError, Result};
use super::query::{index_mapping, search_body};
use crate::config::OpenSearchSettings;
use crate::documents::{ContentType, Document, SearchHit};
use crate::network::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::search::SearchBackend;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

const ALREADY_EXISTS: &str = "resource_already_exists_exception";

/// OpenSearch cluster client
#[derive(Clone)]
pub struct OpenSearchClient {
    http: HttpClient,
    base_url: Url,
}

impl OpenSearchClient {
    pub fn new(http: HttpClient, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Build a client from connection settings
    pub fn from_settings(settings: &OpenSearchSettings) -> anyhow::Result<Self> {
        let http = HttpClient::with_settings(settings)?;
        Ok(Self::new(http, settings.base_url()?))
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!("{:?} {}", request.method, request.url);
        Ok(self.http.execute(request).await?)
    }

    fn check(response: HttpResponse) -> Result<HttpResponse> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(OpenSearchError::Status {
                status: response.status,
                body: response.text,
            })
        }
    }

    /// `HEAD /{index}`
    pub async fn index_exists(&self, index: &str) -> Result<bool> {
        let request = HttpRequest::new(HttpMethod::Head, self.url(index)?);
        let response = self.send(request).await?;

        if response.is_not_found() {
            return Ok(false);
        }
        Self::check(response).map(|_| true)
    }

    /// `PUT /{index}` with the fixed mapping. Losing a creation race is not an error.
    pub async fn create_index(&self, index: &str) -> Result<()> {
        let request = HttpRequest::new(HttpMethod::Put, self.url(index)?).json(index_mapping());
        let response = self.send(request).await?;

        match Self::check(response) {
            Ok(_) => Ok(()),
            Err(e) if e.error_type().as_deref() == Some(ALREADY_EXISTS) => {
                debug!("Index {} already exists", index);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// `POST /{index}/_doc`, returns the generated document id
    pub async fn index_document(
        &self,
        index: &str,
        document: &Document,
        refresh: bool,
    ) -> Result<String> {
        let url = self.url(&format!("{}/_doc", index))?;
        let mut request =
            HttpRequest::new(HttpMethod::Post, url).json(serde_json::to_value(document)?);
        if refresh {
            request = request.param("refresh", "true");
        }

        let response = Self::check(self.send(request).await?)?;
        let indexed: IndexResponse = response.json()?;
        Ok(indexed.id)
    }

    /// `POST /{index}/_search`
    pub async fn search(
        &self,
        index: &str,
        query: &str,
        content_type: Option<ContentType>,
    ) -> Result<Vec<SearchHit>> {
        let url = self.url(&format!("{}/_search", index))?;
        let request =
            HttpRequest::new(HttpMethod::Post, url).json(search_body(query, content_type));

        let response = Self::check(self.send(request).await?)?;
        let parsed: SearchResponse = response.json()?;

        Ok(parsed
            .hits
            .hits
            .into_iter()
            .map(|hit| SearchHit::from_source(hit.source.title, &hit.source.content))
            .collect())
    }
}

#[async_trait]
impl SearchBackend for OpenSearchClient {
    async fn index_exists(&self, index: &str) -> Result<bool> {
        OpenSearchClient::index_exists(self, index).await
    }

    async fn create_index(&self, index: &str) -> Result<()> {
        OpenSearchClient::create_index(self, index).await
    }

    async fn index_document(&self, index: &str, document: &Document) -> Result<()> {
        OpenSearchClient::index_document(self, index, document, true)
            .await
            .map(|_| ())
    }

    async fn search(
        &self,
        index: &str,
        query: &str,
        content_type: Option<ContentType>,
    ) -> Result<Vec<SearchHit>> {
        OpenSearchClient::search(self, index, query, content_type).await
    }
}

#[derive(Debug, Deserialize)]
struct IndexResponse {
    #[serde(rename = "_id")]
    id: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Hits,
}

#[derive(Debug, Default, Deserialize)]
struct Hits {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source", default)]
    source: HitSource,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HitSource {
    title: String,
    content: String,
}

//! HTTP client for talking to the OpenSearch REST API

use super::request::{HttpMethod, HttpRequest, HttpResponse};
use crate::config::OpenSearchSettings;
use reqwest::{Client, Method, Response};
use std::time::Duration;

/// reqwest client carrying the cluster credentials and TLS policy
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    credentials: Option<(String, String)>,
}

impl HttpClient {
    /// Create a new HTTP client from the OpenSearch connection settings
    pub fn with_settings(settings: &OpenSearchSettings) -> reqwest::Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .gzip(true);

        if !settings.verify_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build()?;

        let credentials = if settings.username.is_empty() {
            None
        } else {
            Some((settings.username.clone(), settings.password.clone()))
        };

        Ok(Self {
            client,
            credentials,
        })
    }

    /// Execute a request and buffer the response body
    pub async fn execute(&self, request: HttpRequest) -> reqwest::Result<HttpResponse> {
        let method = match request.method {
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Post => Method::POST,
        };

        let mut req_builder = self
            .client
            .request(method, request.url)
            .header("Accept", "application/json");

        if let Some((ref user, ref pass)) = self.credentials {
            req_builder = req_builder.basic_auth(user, Some(pass));
        }

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.json(&body);
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    async fn parse_response(response: Response) -> reqwest::Result<HttpResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        Ok(HttpResponse { status, text })
    }
}

//! Settings structures for the facade configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure, mirrors the layout of `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub opensearch: OpenSearchSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with process environment variables (`OS_*`, `INDEX_NAME`, `FACADE_*`)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge values produced by `lookup`. Unparseable numbers and booleans are ignored.
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("OS_HOST") {
            self.opensearch.host = val;
        }
        if let Some(port) = lookup("OS_PORT").and_then(|v| v.parse().ok()) {
            self.opensearch.port = port;
        }
        if let Some(val) = lookup("OS_USER") {
            self.opensearch.username = val;
        }
        if let Some(val) = lookup("OS_PASS") {
            self.opensearch.password = val;
        }
        if let Some(val) = lookup("INDEX_NAME") {
            self.opensearch.index_name = val;
        }
        if let Some(flag) = lookup("OS_USE_SSL").and_then(|v| parse_bool(&v)) {
            self.opensearch.use_ssl = flag;
        }
        if let Some(flag) = lookup("OS_VERIFY_CERTS").and_then(|v| parse_bool(&v)) {
            self.opensearch.verify_certs = flag;
        }
        if let Some(val) = lookup("FACADE_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(port) = lookup("FACADE_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Connection settings for the OpenSearch cluster
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenSearchSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Index every route operates on
    pub index_name: String,
    /// Talk HTTPS to the cluster
    pub use_ssl: bool,
    /// Verify the cluster's TLS certificate. The official image ships a self-signed one.
    pub verify_certs: bool,
    /// Request timeout in seconds
    pub request_timeout: f64,
}

impl Default for OpenSearchSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9200,
            username: "admin".to_string(),
            password: "admin".to_string(),
            index_name: crate::DEFAULT_INDEX_NAME.to_string(),
            use_ssl: true,
            verify_certs: false,
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
        }
    }
}

impl OpenSearchSettings {
    /// Base URL of the cluster, e.g. `https://localhost:9200`
    pub fn base_url(&self) -> Result<url::Url> {
        let scheme = if self.use_ssl { "https" } else { "http" };
        let url = url::Url::parse(&format!("{}://{}:{}/", scheme, self.host, self.port))?;
        Ok(url)
    }
}

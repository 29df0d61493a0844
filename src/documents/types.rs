//! Document and hit types stored in and read back from the index

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of characters kept in a hit snippet
pub const SNIPPET_CHARS: usize = 50;

/// Kind of content a document holds. Stored as a `keyword` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    Blog,
    News,
    Faq,
}

impl ContentType {
    /// Every allowed value, in the order reported to clients
    pub const ALL: [ContentType; 4] = [
        ContentType::Article,
        ContentType::Blog,
        ContentType::News,
        ContentType::Faq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Blog => "blog",
            ContentType::News => "news",
            ContentType::Faq => "faq",
        }
    }

    /// Allowed values formatted as `['article', 'blog', 'news', 'faq']`
    pub fn allowed_list() -> String {
        let names: Vec<String> = Self::ALL.iter().map(|c| format!("'{}'", c)).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known content type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("content_type must be one of {}", ContentType::allowed_list())]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

/// A document as indexed into OpenSearch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            content_type,
        }
    }
}

/// A search result as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
}

impl SearchHit {
    /// Build a hit from the stored fields, cutting `content` down to a snippet
    pub fn from_source(title: impl Into<String>, content: &str) -> Self {
        Self {
            title: title.into(),
            snippet: snippet(content),
        }
    }
}

/// First [`SNIPPET_CHARS`] characters of `content`
pub fn snippet(content: &str) -> String {
    content.chars().take(SNIPPET_CHARS).collect()
}

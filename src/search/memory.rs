//! In-process backend used by tests in place of a live cluster

use super::traits::SearchBackend;
use crate::documents::{ContentType, Document, SearchHit};
use crate::opensearch::{Result, MAX_HITS};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Term matching is a case-insensitive substring test per whitespace token.
/// Title matches sort before content-only matches.
#[derive(Default)]
pub struct MemoryBackend {
    indices: Mutex<HashMap<String, Vec<Document>>>,
    creates: Mutex<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_index(&self, index: &str) -> bool {
        self.indices.lock().unwrap().contains_key(index)
    }

    pub fn document_count(&self, index: &str) -> usize {
        self.indices
            .lock()
            .unwrap()
            .get(index)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn create_calls(&self) -> usize {
        *self.creates.lock().unwrap()
    }
}

fn matches(text: &str, terms: &[String]) -> bool {
    let text = text.to_lowercase();
    terms.iter().any(|t| text.contains(t.as_str()))
}

#[async_trait]
impl SearchBackend for MemoryBackend {
    async fn index_exists(&self, index: &str) -> Result<bool> {
        Ok(self.has_index(index))
    }

    async fn create_index(&self, index: &str) -> Result<()> {
        *self.creates.lock().unwrap() += 1;
        self.indices
            .lock()
            .unwrap()
            .entry(index.to_string())
            .or_default();
        Ok(())
    }

    async fn index_document(&self, index: &str, document: &Document) -> Result<()> {
        self.indices
            .lock()
            .unwrap()
            .entry(index.to_string())
            .or_default()
            .push(document.clone());
        Ok(())
    }

    async fn search(
        &self,
        index: &str,
        query: &str,
        content_type: Option<ContentType>,
    ) -> Result<Vec<SearchHit>> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        let indices = self.indices.lock().unwrap();
        let docs = indices.get(index).map(Vec::as_slice).unwrap_or(&[]);

        let mut scored: Vec<(u8, &Document)> = docs
            .iter()
            .filter(|d| content_type.map_or(true, |ct| d.content_type == ct))
            .filter_map(|d| {
                if matches(&d.title, &terms) {
                    Some((2, d))
                } else if matches(&d.content, &terms) {
                    Some((1, d))
                } else {
                    None
                }
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(MAX_HITS)
            .map(|(_, d)| SearchHit::from_source(d.title.clone(), &d.content))
            .collect())
    }
}

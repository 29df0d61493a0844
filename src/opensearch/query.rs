//! Request bodies sent to OpenSearch

use crate::documents::ContentType;
use serde_json::{json, Value};

/// Upper bound on hits returned per search
pub const MAX_HITS: usize = 50;

/// Settings and mappings used when creating the index
pub fn index_mapping() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 0
        },
        "mappings": {
            "properties": {
                "title": { "type": "text" },
                "content": { "type": "text" },
                "content_type": { "type": "keyword" }
            }
        }
    })
}

/// Full-text query over title (boosted) and content, with an optional exact content type filter
pub fn search_body(query: &str, content_type: Option<ContentType>) -> Value {
    let filter: Vec<Value> = content_type
        .map(|ct| json!({ "term": { "content_type": ct.as_str() } }))
        .into_iter()
        .collect();

    json!({
        "query": {
            "bool": {
                "must": [{
                    "multi_match": {
                        "query": query,
                        "fields": ["title^2", "content"],
                        "type": "best_fields"
                    }
                }],
                "filter": filter
            }
        },
        "_source": ["title", "content"],
        "size": MAX_HITS
    })
}

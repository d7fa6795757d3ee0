use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::boosting::intent::QueryIntent;
use crate::registry::ContentType;

/// Free-form metadata attached to an upstream search hit.
///
/// The keys the boosting engine reads are typed; anything else is carried
/// through untouched in `extra`. List fields accept an array, a
/// comma-separated string or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub keywords: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub technologies: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Vec<String> = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(joined)) => joined.split(',').map(str::to_string).collect(),
        Some(Value::Array(values)) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// One hit from the upstream semantic search, re-scored in place by boosting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub content_type: ContentType,
    pub content_id: String,
    pub title: String,
    #[serde(default)]
    pub url: String,
    /// Similarity in [0, 1].
    pub similarity: f64,
    #[serde(default)]
    pub metadata: SearchMetadata,
}

/// What a boosting pass did. Callers are free to ignore it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoostSummary {
    pub intent: QueryIntent,
    pub keywords: Vec<String>,
    /// Total rule applications across all results.
    pub rules_fired: usize,
    pub resorted: bool,
}

//! JSON request handling for the `relevance` driver binary.
//!
//! One request in, one JSON document out:
//!
//! ```json
//! {"action": "boost", "query": "...", "results": [ ... ]}
//! {"action": "match", "job_description": "..."}
//! {"action": "keywords", "text": "..."}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::boosting::SearchResult;
use crate::errors::RelevanceError;
use crate::keywords::extract_query_keywords;
use crate::state::RelevanceService;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    Boost {
        query: String,
        results: Vec<SearchResult>,
    },
    Match {
        job_description: String,
    },
    Keywords {
        text: String,
    },
}

impl Request {
    pub fn parse(raw: &str) -> Result<Self, RelevanceError> {
        if raw.trim().is_empty() {
            return Err(RelevanceError::InvalidRequest(
                "expected a JSON request on stdin".to_string(),
            ));
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// Runs one request against the service and returns the JSON response body.
pub fn handle_request(service: &RelevanceService, request: Request) -> Result<Value, RelevanceError> {
    match request {
        Request::Boost { query, mut results } => {
            let summary = service.apply_boosting(&query, &mut results);
            info!(
                "Boosted {} results ({} rule applications, resorted: {})",
                results.len(),
                summary.rules_fired,
                summary.resorted
            );
            Ok(serde_json::to_value(results)?)
        }
        Request::Match { job_description } => {
            let result = service.match_job_description(&job_description);
            info!(
                "Matched job description: {} skills, score {}",
                result.skills.len(),
                result.match_score
            );
            Ok(serde_json::to_value(result)?)
        }
        Request::Keywords { text } => Ok(serde_json::to_value(extract_query_keywords(&text))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boosting::BoostConfig;

    fn service() -> RelevanceService {
        RelevanceService::portfolio(BoostConfig::default())
    }

    #[test]
    fn test_parse_boost_request() {
        let raw = r#"{
            "action": "boost",
            "query": "quantum projects",
            "results": [
                {"content_type": "project", "content_id": "quantum-ide", "title": "Quantum IDE", "similarity": 0.4}
            ]
        }"#;
        match Request::parse(raw).unwrap() {
            Request::Boost { query, results } => {
                assert_eq!(query, "quantum projects");
                assert_eq!(results.len(), 1);
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_input_is_invalid() {
        let err = Request::parse("  \n").unwrap_err();
        assert_eq!(err.code(), "INVALID_REQUEST");
    }

    #[test]
    fn test_parse_unknown_action_is_malformed() {
        let err = Request::parse(r#"{"action": "delete"}"#).unwrap_err();
        assert_eq!(err.code(), "MALFORMED_JSON");
    }

    #[test]
    fn test_handle_boost_returns_sorted_results() {
        let request = Request::Boost {
            query: "quantum".to_string(),
            results: serde_json::from_str(
                r#"[
                    {"content_type": "experience", "content_id": "kaiser", "title": "Data Engineering Intern", "similarity": 0.8},
                    {"content_type": "project", "content_id": "quantum-ide", "title": "Quantum IDE", "similarity": 0.5}
                ]"#,
            )
            .unwrap(),
        };
        let body = handle_request(&service(), request).unwrap();
        assert_eq!(body[0]["content_id"], "quantum-ide");
        assert_eq!(body[0]["similarity"], 1.0);
    }

    #[test]
    fn test_handle_match_returns_match_result() {
        let request = Request::Match {
            job_description: "5+ years with React, TypeScript, and AWS".to_string(),
        };
        let body = handle_request(&service(), request).unwrap();
        assert_eq!(body["matchScore"], 54);
        assert_eq!(body["experiences"][0]["id"], "suno-analytics");
    }

    #[test]
    fn test_handle_keywords() {
        let request = Request::Keywords {
            text: "Tell me about Deven's papers".to_string(),
        };
        let body = handle_request(&service(), request).unwrap();
        assert_eq!(body, serde_json::json!(["papers"]));
    }

    #[test]
    fn test_boost_request_with_null_metadata_lists() {
        let raw = r#"{
            "action": "boost",
            "query": "quantum noise",
            "results": [
                {"content_type": "paper", "content_id": "quantum-error-mitigation", "title": "Error Mitigation",
                 "similarity": 0.5, "metadata": {"keywords": null, "technologies": null}},
                {"content_type": "paper", "content_id": "hybrid-retrieval", "title": "Hybrid Retrieval",
                 "similarity": 0.5, "metadata": {"keywords": "quantum, noise"}}
            ]
        }"#;
        let request = Request::parse(raw).unwrap();
        let body = handle_request(&service(), request).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 2);
    }
}

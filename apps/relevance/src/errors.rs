use serde_json::{json, Value};
use thiserror::Error;

use crate::registry::validation::RegistryIssue;

/// Errors raised at the edges of the relevance engine.
///
/// The core operations are total and never fail; these cover request
/// decoding, catalog validation and I/O in the driver.
#[derive(Debug, Error)]
pub enum RelevanceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content registry is inconsistent: {}", format_issues(.0))]
    Registry(Vec<RegistryIssue>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl RelevanceError {
    /// Stable machine-readable code for the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            RelevanceError::InvalidRequest(_) => "INVALID_REQUEST",
            RelevanceError::Json(_) => "MALFORMED_JSON",
            RelevanceError::Registry(_) => "REGISTRY_ERROR",
            RelevanceError::Io(_) => "IO_ERROR",
            RelevanceError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// `{"error": {"code": .., "message": ..}}`
    pub fn to_envelope(&self) -> Value {
        if let RelevanceError::Internal(e) = self {
            tracing::error!("Internal error: {e:?}");
        }
        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string()
            }
        })
    }
}

fn format_issues(issues: &[RegistryIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

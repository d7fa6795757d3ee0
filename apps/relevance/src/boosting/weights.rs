use serde::{Deserialize, Serialize};

/// Score adjustments applied by the boosting pass. All values are in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostConfig {
    /// Added to `paper` results when the query asks about research.
    pub paper_intent: f64,
    /// Added to `project` results when the query asks about projects.
    pub project_intent: f64,
    /// Added to `experience` results when the query asks about jobs.
    pub experience_intent: f64,
    /// Added when the keyword index links the result to a query keyword.
    pub index_match: f64,
    /// Added when a query keyword occurs inside the result title.
    pub title_match: f64,
    /// Scaled by the fraction of query keywords found in title and metadata.
    pub metadata_overlap: f64,
    /// Subtracted when no lexical rule fired. Zero disables the penalty.
    pub no_match_penalty: f64,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            paper_intent: 0.20,
            project_intent: 0.15,
            experience_intent: 0.15,
            index_match: 0.25,
            title_match: 0.30,
            metadata_overlap: 0.20,
            no_match_penalty: 0.15,
        }
    }
}

/// Adds `delta` to a similarity score and clamps the result to [0, 1].
pub fn adjust_similarity(similarity: f64, delta: f64) -> f64 {
    (similarity + delta).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_clamps_upper() {
        assert_eq!(adjust_similarity(0.95, 0.2), 1.0);
    }

    #[test]
    fn test_adjust_clamps_lower() {
        assert_eq!(adjust_similarity(0.1, -0.15), 0.0);
    }

    #[test]
    fn test_adjust_in_range() {
        assert!((adjust_similarity(0.5, 0.25) - 0.75).abs() < f64::EPSILON);
    }
}

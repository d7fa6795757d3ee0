use std::sync::Arc;

use tracing::{info, warn};

use crate::boosting::{apply_boosting_with, BoostConfig, BoostSummary, SearchResult};
use crate::errors::RelevanceError;
use crate::index::{KeywordIndex, KeywordIndexService};
use crate::matching::{match_job_description_with, MatchResult};
use crate::registry::validation::validate_registry;
use crate::registry::ContentRegistry;

/// Shared handle to everything the search and job-match paths need.
/// Cheap to clone; safe to share across threads.
#[derive(Clone)]
pub struct RelevanceService {
    pub index: Arc<KeywordIndexService>,
    pub boost: BoostConfig,
}

impl RelevanceService {
    pub fn new(index: Arc<KeywordIndexService>, boost: BoostConfig) -> Self {
        Self { index, boost }
    }

    /// Service over the built-in catalog, sharing the process-wide index cache.
    pub fn portfolio(boost: BoostConfig) -> Self {
        Self::new(KeywordIndexService::portfolio(), boost)
    }

    /// Validates the catalog and builds the index up front instead of on the
    /// first request.
    pub fn warm_up(&self) -> Result<(), RelevanceError> {
        let issues = validate_registry(self.registry());
        if !issues.is_empty() {
            for issue in &issues {
                warn!("Registry issue ({:?}): {issue}", issue.kind);
            }
            return Err(RelevanceError::Registry(issues));
        }

        let index = self.keyword_index();
        info!("Relevance service ready ({} indexed keywords)", index.keyword_count());
        Ok(())
    }

    pub fn registry(&self) -> &ContentRegistry {
        self.index.registry()
    }

    pub fn keyword_index(&self) -> &KeywordIndex {
        self.index.index()
    }

    pub fn apply_boosting(&self, query: &str, results: &mut [SearchResult]) -> BoostSummary {
        apply_boosting_with(&self.index, &self.boost, query, results)
    }

    pub fn match_job_description(&self, job_description: &str) -> MatchResult {
        match_job_description_with(self.registry(), job_description)
    }
}

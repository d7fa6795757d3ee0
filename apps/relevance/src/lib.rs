//! Content relevance engine for a personal portfolio.
//!
//! - [`index`]: keyword index over the static content registry
//! - [`boosting`]: lexical re-ranking of upstream semantic-search hits
//! - [`matching`]: job-description → skills → experiences/projects/education
//!
//! Everything is synchronous and in-memory. The registry is immutable and the
//! keyword index is built once per [`index::KeywordIndexService`].

pub mod boosting;
pub mod config;
pub mod errors;
pub mod index;
pub mod keywords;
pub mod matching;
pub mod registry;
pub mod request;
pub mod state;

pub use boosting::{apply_boosting, BoostConfig, SearchResult};
pub use errors::RelevanceError;
pub use index::{content_matches_keywords, find_matching_content, get_keyword_index};
pub use matching::{match_job_description, MatchResult};
pub use state::RelevanceService;

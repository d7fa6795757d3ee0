// Keyword Index: inverted index keyword → content ids over the content registry.
// Built once per service and cached; all lookups are read-only afterwards.

pub mod builder;
pub mod model;
pub mod service;

pub use builder::build_keyword_index;
pub use model::{KeywordIndex, MatchingContent, Postings};
pub use service::{
    content_matches_keywords, find_matching_content, get_keyword_index, KeywordIndexService,
};

//! Lazily built, memoized keyword index.
//!
//! `KeywordIndexService` owns the cache: the first call to [`KeywordIndexService::index`]
//! builds it, every later call returns the same object. `OnceLock` guarantees a
//! single writer even when the first calls race.

use std::sync::{Arc, LazyLock, OnceLock};

use tracing::debug;

use crate::index::builder::build_keyword_index;
use crate::index::model::{KeywordIndex, MatchingContent};
use crate::registry::{ContentRegistry, ContentType};

static PORTFOLIO_INDEX: LazyLock<Arc<KeywordIndexService>> =
    LazyLock::new(|| Arc::new(KeywordIndexService::new(ContentRegistry::shared())));

pub struct KeywordIndexService {
    registry: Arc<ContentRegistry>,
    index: OnceLock<KeywordIndex>,
}

impl KeywordIndexService {
    /// Creates a service that builds its index from `registry` on first use.
    pub fn new(registry: Arc<ContentRegistry>) -> Self {
        Self {
            registry,
            index: OnceLock::new(),
        }
    }

    /// Creates a service around an index built elsewhere.
    pub fn with_index(registry: Arc<ContentRegistry>, index: KeywordIndex) -> Self {
        Self {
            registry,
            index: OnceLock::from(index),
        }
    }

    /// Process-wide service over the built-in portfolio catalog.
    pub fn portfolio() -> Arc<KeywordIndexService> {
        Arc::clone(&*PORTFOLIO_INDEX)
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    pub fn is_built(&self) -> bool {
        self.index.get().is_some()
    }

    pub fn index(&self) -> &KeywordIndex {
        self.index.get_or_init(|| {
            debug!("Keyword index cache miss, building");
            build_keyword_index(&self.registry)
        })
    }

    pub fn find_matching_content<S: AsRef<str>>(
        &self,
        query_keywords: &[S],
        content_type: Option<ContentType>,
    ) -> MatchingContent {
        self.index().find_matching_content(query_keywords, content_type)
    }

    pub fn content_matches_keywords<S: AsRef<str>>(
        &self,
        content_id: &str,
        content_type: ContentType,
        query_keywords: &[S],
    ) -> bool {
        self.index()
            .content_matches_keywords(content_id, content_type, query_keywords)
    }
}

/// Returns the memoized index over the built-in portfolio catalog.
pub fn get_keyword_index() -> &'static KeywordIndex {
    PORTFOLIO_INDEX.index()
}

/// [`KeywordIndex::find_matching_content`] against the built-in catalog.
pub fn find_matching_content<S: AsRef<str>>(
    query_keywords: &[S],
    content_type: Option<ContentType>,
) -> MatchingContent {
    get_keyword_index().find_matching_content(query_keywords, content_type)
}

/// [`KeywordIndex::content_matches_keywords`] against the built-in catalog.
pub fn content_matches_keywords<S: AsRef<str>>(
    content_id: &str,
    content_type: ContentType,
    query_keywords: &[S],
) -> bool {
    get_keyword_index().content_matches_keywords(content_id, content_type, query_keywords)
}

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use crate::keywords::get_keyword_variants;
use crate::registry::ContentType;

/// Per-content-type postings for one keyword: content id → insertion count.
///
/// The count records how often the keyword was inserted for that id (field
/// importance is expressed by inserting more than once). Lookups only test
/// presence; the count is kept for inspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Postings {
    pub projects: BTreeMap<String, u32>,
    pub experiences: BTreeMap<String, u32>,
    pub papers: BTreeMap<String, u32>,
    pub education: BTreeMap<String, u32>,
}

impl Postings {
    pub fn bucket(&self, content_type: ContentType) -> Option<&BTreeMap<String, u32>> {
        match content_type {
            ContentType::Project => Some(&self.projects),
            ContentType::Experience => Some(&self.experiences),
            ContentType::Paper => Some(&self.papers),
            ContentType::Education => Some(&self.education),
            ContentType::Other => None,
        }
    }

    fn bucket_mut(&mut self, content_type: ContentType) -> Option<&mut BTreeMap<String, u32>> {
        match content_type {
            ContentType::Project => Some(&mut self.projects),
            ContentType::Experience => Some(&mut self.experiences),
            ContentType::Paper => Some(&mut self.papers),
            ContentType::Education => Some(&mut self.education),
            ContentType::Other => None,
        }
    }
}

/// Content ids matched by a keyword lookup, grouped by content type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchingContent {
    pub projects: BTreeSet<String>,
    pub experiences: BTreeSet<String>,
    pub papers: BTreeSet<String>,
    pub education: BTreeSet<String>,
}

impl MatchingContent {
    pub fn ids(&self, content_type: ContentType) -> Option<&BTreeSet<String>> {
        match content_type {
            ContentType::Project => Some(&self.projects),
            ContentType::Experience => Some(&self.experiences),
            ContentType::Paper => Some(&self.papers),
            ContentType::Education => Some(&self.education),
            ContentType::Other => None,
        }
    }

    fn ids_mut(&mut self, content_type: ContentType) -> Option<&mut BTreeSet<String>> {
        match content_type {
            ContentType::Project => Some(&mut self.projects),
            ContentType::Experience => Some(&mut self.experiences),
            ContentType::Paper => Some(&mut self.papers),
            ContentType::Education => Some(&mut self.education),
            ContentType::Other => None,
        }
    }

    pub fn contains(&self, content_type: ContentType, content_id: &str) -> bool {
        self.ids(content_type)
            .map(|ids| ids.contains(content_id))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.projects.len() + self.experiences.len() + self.papers.len() + self.education.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Inverted index from normalized keyword to the content that mentions it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KeywordIndex {
    entries: HashMap<String, Postings>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `times` insertions of `keyword → content_id`.
    ///
    /// `keyword` must already be normalized. Empty keywords and `Other`
    /// content are ignored.
    pub fn insert(&mut self, keyword: &str, content_type: ContentType, content_id: &str, times: u32) {
        if keyword.is_empty() || times == 0 || content_type == ContentType::Other {
            return;
        }
        let postings = self.entries.entry(keyword.to_string()).or_default();
        if let Some(bucket) = postings.bucket_mut(content_type) {
            *bucket.entry(content_id.to_string()).or_insert(0) += times;
        }
    }

    pub fn postings(&self, keyword: &str) -> Option<&Postings> {
        self.entries.get(keyword)
    }

    /// Number of times `keyword → content_id` was inserted (0 if absent).
    pub fn weight(&self, keyword: &str, content_type: ContentType, content_id: &str) -> u32 {
        self.entries
            .get(keyword)
            .and_then(|p| p.bucket(content_type))
            .and_then(|bucket| bucket.get(content_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn keyword_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unions the content ids indexed under each query keyword or its
    /// singular/plural variant, optionally restricted to one content type.
    pub fn find_matching_content<S: AsRef<str>>(
        &self,
        query_keywords: &[S],
        content_type: Option<ContentType>,
    ) -> MatchingContent {
        let mut matches = MatchingContent::default();
        let types: &[ContentType] = match &content_type {
            Some(ct) => std::slice::from_ref(ct),
            None => &ContentType::INDEXED,
        };

        for keyword in query_keywords {
            for variant in get_keyword_variants(keyword.as_ref()) {
                let Some(postings) = self.entries.get(&variant) else {
                    continue;
                };
                for &ct in types {
                    if let (Some(bucket), Some(out)) = (postings.bucket(ct), matches.ids_mut(ct)) {
                        out.extend(bucket.keys().cloned());
                    }
                }
            }
        }

        matches
    }

    /// Whether the given content is reachable from any of the query keywords.
    pub fn content_matches_keywords<S: AsRef<str>>(
        &self,
        content_id: &str,
        content_type: ContentType,
        query_keywords: &[S],
    ) -> bool {
        if content_type == ContentType::Other {
            return false;
        }
        self.find_matching_content(query_keywords, Some(content_type))
            .contains(content_type, content_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> KeywordIndex {
        let mut index = KeywordIndex::new();
        index.insert("project", ContentType::Project, "quantum-ide", 3);
        index.insert("python", ContentType::Experience, "kaiser", 1);
        index.insert("python", ContentType::Project, "stock-forecasting", 3);
        index.insert("python", ContentType::Project, "stock-forecasting", 1);
        index
    }

    #[test]
    fn test_insert_accumulates_weight() {
        let index = sample_index();
        assert_eq!(index.weight("python", ContentType::Project, "stock-forecasting"), 4);
        assert_eq!(index.weight("python", ContentType::Experience, "kaiser"), 1);
        assert_eq!(index.weight("python", ContentType::Paper, "kaiser"), 0);
    }

    #[test]
    fn test_insert_ignores_empty_and_other() {
        let mut index = KeywordIndex::new();
        index.insert("", ContentType::Project, "x", 1);
        index.insert("rust", ContentType::Other, "x", 1);
        index.insert("rust", ContentType::Project, "x", 0);
        assert!(index.postings("rust").is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_find_matching_uses_plural_variant() {
        let index = sample_index();
        let matches = index.find_matching_content(&["projects"], None);
        assert!(matches.contains(ContentType::Project, "quantum-ide"));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_find_matching_restricts_type() {
        let index = sample_index();
        let matches = index.find_matching_content(&["python"], Some(ContentType::Experience));
        assert!(matches.contains(ContentType::Experience, "kaiser"));
        assert!(matches.projects.is_empty());
    }

    #[test]
    fn test_find_matching_unknown_keyword_is_empty() {
        let index = sample_index();
        assert!(index.find_matching_content(&["cobol"], None).is_empty());
        let none: [&str; 0] = [];
        assert!(index.find_matching_content(&none, None).is_empty());
    }

    #[test]
    fn test_content_matches_keywords() {
        let index = sample_index();
        assert!(index.content_matches_keywords("kaiser", ContentType::Experience, &["Python"]));
        assert!(!index.content_matches_keywords("kaiser", ContentType::Project, &["python"]));
        assert!(!index.content_matches_keywords("kaiser", ContentType::Other, &["python"]));
    }
}

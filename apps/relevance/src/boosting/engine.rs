//! Boosting Engine: re-scores upstream semantic-search hits with lexical signals.
//!
//! Rules, applied per result in this order, each additive and clamped to [0, 1]:
//! 1. category intent: paper / project / experience vocabulary in the query
//! 2. keyword index: the registry links the result to a query keyword
//! 3. title: a query keyword occurs inside the title
//! 4. metadata overlap: fraction of query keywords found in title + metadata
//! 5. no-match penalty: query keywords exist but rules 2–4 all missed
//!
//! The list is re-sorted (stable, descending) only if some rule fired.

use tracing::debug;

use crate::boosting::intent::QueryIntent;
use crate::boosting::models::{BoostSummary, SearchResult};
use crate::boosting::weights::{adjust_similarity, BoostConfig};
use crate::index::KeywordIndexService;
use crate::keywords::extract_query_keywords;
use crate::registry::ContentType;

/// Boosts `results` for `query` against the built-in catalog with default weights.
pub fn apply_boosting(query: &str, results: &mut [SearchResult]) -> BoostSummary {
    let service = KeywordIndexService::portfolio();
    apply_boosting_with(&service, &BoostConfig::default(), query, results)
}

/// Boosts `results` in place and re-sorts them if any rule fired.
pub fn apply_boosting_with(
    service: &KeywordIndexService,
    config: &BoostConfig,
    query: &str,
    results: &mut [SearchResult],
) -> BoostSummary {
    let intent = QueryIntent::detect(query);
    let keywords = extract_query_keywords(query);

    debug!(
        ?intent,
        keywords = ?keywords,
        results = results.len(),
        "Applying search boosting"
    );

    let rules_fired: usize = results
        .iter_mut()
        .map(|result| boost_result(service, config, intent, &keywords, result))
        .sum();

    let resorted = rules_fired > 0;
    if resorted {
        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    BoostSummary {
        intent,
        keywords,
        rules_fired,
        resorted,
    }
}

/// Applies every rule to one result. Returns how many rules fired.
fn boost_result(
    service: &KeywordIndexService,
    config: &BoostConfig,
    intent: QueryIntent,
    keywords: &[String],
    result: &mut SearchResult,
) -> usize {
    let mut fired = 0;

    let intent_boost = match result.content_type {
        ContentType::Paper if intent.paper => Some(config.paper_intent),
        ContentType::Project if intent.project => Some(config.project_intent),
        ContentType::Experience if intent.experience => Some(config.experience_intent),
        _ => None,
    };
    if let Some(boost) = intent_boost {
        result.similarity = adjust_similarity(result.similarity, boost);
        fired += 1;
        debug!(
            content_id = %result.content_id,
            content_type = %result.content_type,
            boost,
            "Category intent boost"
        );
    }

    let mut lexical_match = false;

    if service.content_matches_keywords(&result.content_id, result.content_type, keywords) {
        result.similarity = adjust_similarity(result.similarity, config.index_match);
        lexical_match = true;
        fired += 1;
        debug!(content_id = %result.content_id, boost = config.index_match, "Keyword index boost");
    }

    let title = result.title.to_lowercase();
    if keywords.iter().any(|kw| title.contains(kw.as_str())) {
        result.similarity = adjust_similarity(result.similarity, config.title_match);
        lexical_match = true;
        fired += 1;
        debug!(content_id = %result.content_id, boost = config.title_match, "Title match boost");
    }

    let matched = count_metadata_matches(result, keywords);
    if matched > 0 {
        let boost = config.metadata_overlap * matched as f64 / keywords.len() as f64;
        result.similarity = adjust_similarity(result.similarity, boost);
        lexical_match = true;
        fired += 1;
        debug!(
            content_id = %result.content_id,
            matched,
            total = keywords.len(),
            boost,
            "Metadata overlap boost"
        );
    }

    if !keywords.is_empty() && !lexical_match && config.no_match_penalty > 0.0 {
        result.similarity = adjust_similarity(result.similarity, -config.no_match_penalty);
        fired += 1;
        debug!(
            content_id = %result.content_id,
            penalty = config.no_match_penalty,
            "No keyword match penalty"
        );
    }

    fired
}

/// Counts query keywords that occur in the title, metadata keywords,
/// technologies or company of a result.
fn count_metadata_matches(result: &SearchResult, keywords: &[String]) -> usize {
    if keywords.is_empty() {
        return 0;
    }

    let meta = &result.metadata;
    let meta_keywords = meta.keywords.join(" ");
    let technologies = meta.technologies.join(" ");
    let haystack = [
        result.title.as_str(),
        meta_keywords.as_str(),
        technologies.as_str(),
        meta.company.as_deref().unwrap_or_default(),
    ]
    .join(" ")
    .to_lowercase();

    keywords
        .iter()
        .filter(|kw| haystack.contains(kw.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boosting::models::SearchMetadata;
    use crate::index::KeywordIndex;
    use crate::registry::ContentRegistry;

    const EPS: f64 = 1e-9;

    fn hit(content_type: ContentType, id: &str, title: &str, similarity: f64) -> SearchResult {
        SearchResult {
            content_type,
            content_id: id.to_string(),
            title: title.to_string(),
            url: format!("/{content_type}/{id}"),
            similarity,
            metadata: SearchMetadata::default(),
        }
    }

    fn similarity_of(results: &[SearchResult], id: &str) -> f64 {
        results
            .iter()
            .find(|r| r.content_id == id)
            .map(|r| r.similarity)
            .unwrap()
    }

    #[test]
    fn test_project_intent_applies_before_lexical_rules() {
        let mut results = vec![
            hit(ContentType::Project, "fitness-tracker", "Fitness Tracker", 0.5),
            hit(ContentType::Paper, "hybrid-retrieval", "Hybrid Retrieval", 0.5),
        ];
        let summary = apply_boosting("Tell me about machine learning projects", &mut results);

        assert!(summary.intent.project);
        assert!(!summary.intent.paper);
        // +0.15 project intent, then -0.15 for no lexical overlap.
        assert!((similarity_of(&results, "fitness-tracker") - 0.5).abs() < EPS);
        // Paper gets only the penalty.
        assert!((similarity_of(&results, "hybrid-retrieval") - 0.35).abs() < EPS);
    }

    #[test]
    fn test_index_match_boost_for_related_project() {
        let mut results = vec![hit(
            ContentType::Project,
            "stock-forecasting",
            "Stock Forecasting Model",
            0.4,
        )];
        apply_boosting("Tell me about machine learning projects", &mut results);
        // 0.4 + 0.15 intent + 0.25 index ("Machine Learning" category).
        assert!((results[0].similarity - 0.8).abs() < EPS);
    }

    #[test]
    fn test_two_boosts_clamp_to_exactly_one() {
        let mut result = hit(
            ContentType::Paper,
            "quantum-error-mitigation",
            "Noise-Aware Error Mitigation for Variational Quantum Algorithms",
            0.95,
        );
        result.metadata.keywords = vec!["quantum computing".to_string()];
        let mut results = vec![result];
        apply_boosting("quantum research", &mut results);
        assert_eq!(results[0].similarity, 1.0);
    }

    #[test]
    fn test_penalty_without_overlap() {
        let mut results = vec![hit(ContentType::Experience, "kaiser", "Data Engineering Intern", 0.9)];
        apply_boosting("kubernetes", &mut results);
        assert!((results[0].similarity - 0.75).abs() < EPS);
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        let mut results = vec![hit(ContentType::Experience, "kaiser", "Data Engineering Intern", 0.1)];
        apply_boosting("kubernetes", &mut results);
        assert_eq!(results[0].similarity, 0.0);
    }

    #[test]
    fn test_no_keywords_no_intent_leaves_results_untouched() {
        let original = vec![
            hit(ContentType::Experience, "kaiser", "Data Engineering Intern", 0.3),
            hit(ContentType::Project, "quantum-ide", "Quantum IDE", 0.6),
        ];
        let mut results = original.clone();
        let summary = apply_boosting("tell me about it", &mut results);
        assert!(summary.keywords.is_empty());
        assert_eq!(summary.rules_fired, 0);
        assert!(!summary.resorted);
        assert_eq!(results, original);
    }

    #[test]
    fn test_results_resorted_after_boosting() {
        let mut results = vec![
            hit(ContentType::Experience, "kaiser", "Data Engineering Intern", 0.8),
            hit(ContentType::Project, "quantum-ide", "Quantum IDE", 0.5),
        ];
        let summary = apply_boosting("quantum", &mut results);
        assert!(summary.resorted);
        assert_eq!(results[0].content_id, "quantum-ide");
        assert_eq!(results[0].similarity, 1.0);
        assert!((results[1].similarity - 0.65).abs() < EPS);
    }

    #[test]
    fn test_metadata_overlap_is_proportional() {
        let service = KeywordIndexService::with_index(ContentRegistry::shared(), KeywordIndex::new());
        let mut result = hit(ContentType::Other, "blog-1", "Notes", 0.5);
        result.metadata.technologies = vec!["Kafka".to_string()];
        let mut results = vec![result];
        apply_boosting_with(&service, &BoostConfig::default(), "kafka streams", &mut results);
        // One of two keywords matched: 0.20 × 1/2.
        assert!((results[0].similarity - 0.6).abs() < EPS);
    }

    #[test]
    fn test_company_metadata_counts_as_overlap() {
        let service = KeywordIndexService::with_index(ContentRegistry::shared(), KeywordIndex::new());
        let mut result = hit(ContentType::Experience, "x", "Intern", 0.5);
        result.metadata.company = Some("Globex".to_string());
        let mut results = vec![result];
        apply_boosting_with(&service, &BoostConfig::default(), "globex", &mut results);
        assert!((results[0].similarity - 0.7).abs() < EPS);
    }

    #[test]
    fn test_index_weight_does_not_scale_boost() {
        let mut index = KeywordIndex::new();
        index.insert("kafka", ContentType::Project, "heavy", 3);
        index.insert("kafka", ContentType::Project, "light", 1);
        let service = KeywordIndexService::with_index(ContentRegistry::shared(), index);

        let mut results = vec![
            hit(ContentType::Project, "heavy", "Pipeline", 0.5),
            hit(ContentType::Project, "light", "Stream", 0.5),
        ];
        apply_boosting_with(&service, &BoostConfig::default(), "kafka", &mut results);
        assert!((similarity_of(&results, "heavy") - 0.75).abs() < EPS);
        assert!((similarity_of(&results, "light") - 0.75).abs() < EPS);
    }

    #[test]
    fn test_zero_penalty_disables_lexical_gate() {
        let config = BoostConfig {
            no_match_penalty: 0.0,
            ..BoostConfig::default()
        };
        let service = KeywordIndexService::portfolio();
        let mut results = vec![hit(ContentType::Experience, "kaiser", "Data Engineering Intern", 0.9)];
        let summary = apply_boosting_with(&service, &config, "kubernetes", &mut results);
        assert_eq!(results[0].similarity, 0.9);
        assert!(!summary.resorted);
    }

    #[test]
    fn test_stable_order_for_equal_scores() {
        let mut results = vec![
            hit(ContentType::Experience, "kaiser", "Data Engineering Intern", 0.5),
            hit(ContentType::Experience, "patelco", "Software Engineering Intern", 0.5),
        ];
        apply_boosting("kubernetes", &mut results);
        assert_eq!(results[0].content_id, "kaiser");
        assert_eq!(results[1].content_id, "patelco");
    }
}

//! Job Matcher: correlates a free-text job description with portfolio content.
//!
//! Skills found in the description select skill mappings; the mappings' edges
//! select experiences, projects and education. Experiences and projects are
//! ranked by how many matched skills reference them.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::skills::extract_matched_skills_with;
use crate::registry::{ContentRegistry, Education, Experience, Project, SkillMapping};

/// Structured correlation of a job description to the content registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    /// 0 – 100
    pub match_score: u32,
    /// Same as `skills`; kept for consumers that read this name.
    pub extracted_keywords: Vec<String>,
    pub matched_skill_mappings: Vec<SkillMapping>,
}

/// Matches `job_description` against the built-in catalog.
pub fn match_job_description(job_description: &str) -> MatchResult {
    match_job_description_with(ContentRegistry::portfolio(), job_description)
}

pub fn match_job_description_with(registry: &ContentRegistry, job_description: &str) -> MatchResult {
    let skills = extract_matched_skills_with(registry, job_description);

    let matched_mappings: Vec<SkillMapping> = registry
        .skill_mappings()
        .iter()
        .filter(|m| skills.iter().any(|s| s.eq_ignore_ascii_case(&m.skill)))
        .cloned()
        .collect();

    let experiences = rank_by_references(
        registry.experiences(),
        |e| e.id.as_str(),
        matched_mappings.iter().flat_map(|m| m.experience_ids.iter()),
    );
    let projects = rank_by_references(
        registry.projects(),
        |p| p.id.as_str(),
        matched_mappings.iter().flat_map(|m| m.project_ids.iter()),
    );

    let education_ids: Vec<&str> = matched_mappings
        .iter()
        .flat_map(|m| m.education_ids.iter().map(String::as_str))
        .collect();
    // No education edges means "show everything", not "show nothing".
    let education: Vec<Education> = if education_ids.is_empty() {
        registry.education().to_vec()
    } else {
        registry
            .education()
            .iter()
            .filter(|e| education_ids.contains(&e.id.as_str()))
            .cloned()
            .collect()
    };

    let match_score = compute_match_score(
        experiences.len(),
        projects.len(),
        skills.len(),
        registry.experiences().len(),
        registry.projects().len(),
    );

    debug!(
        skills = skills.len(),
        experiences = experiences.len(),
        projects = projects.len(),
        match_score,
        "Job description matched"
    );

    MatchResult {
        extracted_keywords: skills.clone(),
        skills,
        experiences,
        projects,
        education,
        match_score,
        matched_skill_mappings: matched_mappings,
    }
}

/// Keeps the items referenced at least once, ordered by reference count
/// (descending). Ties keep registry order.
fn rank_by_references<'a, T: Clone>(
    items: &[T],
    id_of: impl Fn(&T) -> &str,
    references: impl Iterator<Item = &'a String>,
) -> Vec<T> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for id in references {
        *counts.entry(id.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(usize, &T)> = items
        .iter()
        .filter_map(|item| counts.get(id_of(item)).map(|&count| (count, item)))
        .collect();
    ranked.sort_by_key(|(count, _)| Reverse(*count));
    ranked.into_iter().map(|(_, item)| item.clone()).collect()
}

/// `round(100 × (matched experiences + matched projects + skills) /
/// (all experiences + all projects + skills))`, capped at 100.
///
/// `skills` appears on both sides of the ratio, so the score rises with the
/// number of skills found even when few items correlate. Returns 0 for an
/// empty catalog with no skills.
pub fn compute_match_score(
    matched_experiences: usize,
    matched_projects: usize,
    skills: usize,
    all_experiences: usize,
    all_projects: usize,
) -> u32 {
    let denominator = all_experiences + all_projects + skills;
    if denominator == 0 {
        return 0;
    }
    let numerator = matched_experiences + matched_projects + skills;
    let score = (100.0 * numerator as f64 / denominator as f64).round() as u32;
    score.min(100)
}

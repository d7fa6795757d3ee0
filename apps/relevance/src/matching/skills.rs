//! Skill extraction from free-text job descriptions.
//!
//! Two passes over the lowercased text:
//! 1. alias pass: every `KEYWORD_TO_SKILLS` phrase contained in the text
//!    contributes its target skills
//! 2. direct pass: every taxonomy skill contained in the text
//!
//! Version-control tools are never returned. The single-letter skill "C" only
//! matches as a standalone word so that "Created" or "Cloud" do not count.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::matching::aliases::{is_excluded_skill, KEYWORD_TO_SKILLS};
use crate::registry::ContentRegistry;

static C_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)c(?:\s|$)").expect("static regex"));

/// Extracts skills from `text` against the built-in catalog.
pub fn extract_matched_skills(text: &str) -> Vec<String> {
    extract_matched_skills_with(ContentRegistry::portfolio(), text)
}

/// Extracts canonical taxonomy skills mentioned in `text`, in first-match order.
pub fn extract_matched_skills_with(registry: &ContentRegistry, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut skills = Vec::new();
    let mut seen = HashSet::new();

    let mut add = |skill: &str| {
        if seen.insert(skill.to_lowercase()) {
            skills.push(skill.to_string());
        }
    };

    for (phrase, targets) in KEYWORD_TO_SKILLS {
        if !lowered.contains(phrase) {
            continue;
        }
        for target in *targets {
            if is_excluded_skill(target) {
                continue;
            }
            if let Some(canonical) = registry.canonical_skill(target) {
                add(canonical);
            }
        }
    }

    for skill in registry.skill_taxonomy() {
        if is_excluded_skill(skill) {
            continue;
        }
        if mentions_skill(&lowered, skill) {
            add(skill);
        }
    }

    skills
}

fn mentions_skill(lowered_text: &str, skill: &str) -> bool {
    if skill.eq_ignore_ascii_case("c") {
        C_WORD.is_match(lowered_text)
    } else {
        lowered_text.contains(&skill.to_lowercase())
    }
}

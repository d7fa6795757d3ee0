//! Builds the keyword index from a content registry.
//!
//! Field importance is expressed by inserting a keyword several times for the
//! same content id:
//!
//! | entity     | ×3                           | ×2                            | ×1                          |
//! |------------|------------------------------|-------------------------------|-----------------------------|
//! | project    | title, technologies          | subtitle, categories          | description                 |
//! | experience | title, company               |                               | location, description, achievements |
//! | paper      | title, keywords              | institution                   | abstract                    |
//! | education  | institution                  | degree, concentration         |                             |
//!
//! Skill mappings are indexed afterwards: each keyword of a skill name points
//! at every experience, project and education id mapped to that skill.

use tracing::info;

use crate::index::model::KeywordIndex;
use crate::keywords::{extract_keywords_from_text, normalize_keyword};
use crate::registry::{ContentRegistry, ContentType};

const HIGH: u32 = 3;
const MEDIUM: u32 = 2;
const LOW: u32 = 1;

/// Walks the registry once and returns the populated index.
pub fn build_keyword_index(registry: &ContentRegistry) -> KeywordIndex {
    let mut index = KeywordIndex::new();

    for project in registry.projects() {
        let id = project.id.as_str();
        insert_text(&mut index, &project.title, ContentType::Project, id, HIGH);
        insert_text(&mut index, &project.subtitle, ContentType::Project, id, MEDIUM);
        insert_text(&mut index, &project.description, ContentType::Project, id, LOW);
        for category in &project.categories {
            insert_phrase(&mut index, category, ContentType::Project, id, MEDIUM);
        }
        for tech in &project.technologies {
            insert_phrase(&mut index, tech, ContentType::Project, id, HIGH);
        }
    }

    for experience in registry.experiences() {
        let id = experience.id.as_str();
        insert_text(&mut index, &experience.title, ContentType::Experience, id, HIGH);
        insert_text(&mut index, &experience.company, ContentType::Experience, id, HIGH);
        insert_text(&mut index, &experience.location, ContentType::Experience, id, LOW);
        insert_text(&mut index, &experience.description, ContentType::Experience, id, LOW);
        for achievement in &experience.achievements {
            insert_text(&mut index, achievement, ContentType::Experience, id, LOW);
        }
    }

    for paper in registry.papers() {
        let id = paper.id.as_str();
        insert_text(&mut index, &paper.title, ContentType::Paper, id, HIGH);
        for keyword in &paper.keywords {
            insert_phrase(&mut index, keyword, ContentType::Paper, id, HIGH);
        }
        insert_text(&mut index, &paper.institution, ContentType::Paper, id, MEDIUM);
        insert_text(&mut index, &paper.abstract_text, ContentType::Paper, id, LOW);
    }

    for education in registry.education() {
        let id = education.id.as_str();
        insert_text(&mut index, &education.institution, ContentType::Education, id, HIGH);
        insert_text(&mut index, &education.degree, ContentType::Education, id, MEDIUM);
        let concentration = education.concentration.as_deref().unwrap_or_default();
        insert_text(&mut index, concentration, ContentType::Education, id, MEDIUM);
    }

    for mapping in registry.skill_mappings() {
        let mut keywords = extract_keywords_from_text(&mapping.skill);
        let phrase = normalize_keyword(&mapping.skill);
        if phrase.contains(' ') {
            keywords.push(phrase);
        }

        let edges = [
            (ContentType::Experience, &mapping.experience_ids),
            (ContentType::Project, &mapping.project_ids),
            (ContentType::Education, &mapping.education_ids),
        ];
        for keyword in &keywords {
            for (content_type, ids) in &edges {
                for id in ids.iter() {
                    index.insert(keyword, *content_type, id, LOW);
                }
            }
        }
    }

    info!(
        "Keyword index built: {} keywords from {} projects, {} experiences, {} papers, {} education entries",
        index.keyword_count(),
        registry.projects().len(),
        registry.experiences().len(),
        registry.papers().len(),
        registry.education().len(),
    );

    index
}

fn insert_text(
    index: &mut KeywordIndex,
    text: &str,
    content_type: ContentType,
    content_id: &str,
    times: u32,
) {
    for keyword in extract_keywords_from_text(text) {
        index.insert(&keyword, content_type, content_id, times);
    }
}

/// Indexes the individual words of a short phrase, plus the phrase itself when
/// it spans several words ("machine learning", "sql server").
fn insert_phrase(
    index: &mut KeywordIndex,
    phrase: &str,
    content_type: ContentType,
    content_id: &str,
    times: u32,
) {
    insert_text(index, phrase, content_type, content_id, times);
    let normalized = normalize_keyword(phrase);
    if normalized.contains(' ') {
        index.insert(&normalized, content_type, content_id, times);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Education, Experience, Paper, Project, SkillCategory, SkillMapping};

    fn small_registry() -> ContentRegistry {
        ContentRegistry::new(
            vec![Project {
                id: "tracker".to_string(),
                title: "Fitness Tracker".to_string(),
                subtitle: "Workout logging".to_string(),
                description: "Charts training volume".to_string(),
                technologies: vec!["React Native".to_string()],
                categories: vec!["Mobile".to_string()],
                status: "Live".to_string(),
                period: "2023".to_string(),
            }],
            vec![Experience {
                id: "acme".to_string(),
                title: "Data Engineer".to_string(),
                company: "Acme Corp".to_string(),
                location: "Remote".to_string(),
                description: "Maintained pipelines".to_string(),
                achievements: vec!["Migrated jobs to Spark".to_string()],
            }],
            vec![Paper {
                id: "retrieval".to_string(),
                title: "Hybrid Retrieval".to_string(),
                keywords: vec!["information retrieval".to_string()],
                institution: "Example University".to_string(),
                abstract_text: "Score fusion".to_string(),
            }],
            vec![Education {
                id: "college".to_string(),
                institution: "Example College".to_string(),
                degree: "Mathematics".to_string(),
                concentration: None,
            }],
            vec![SkillCategory {
                name: "Data".to_string(),
                skills: vec!["Spark".to_string(), "Machine Learning".to_string()],
            }],
            vec![SkillMapping {
                skill: "Machine Learning".to_string(),
                experience_ids: vec!["acme".to_string()],
                project_ids: vec![],
                education_ids: vec!["college".to_string()],
            }],
        )
    }

    #[test]
    fn test_high_importance_fields_weigh_more() {
        let index = build_keyword_index(&small_registry());
        assert_eq!(index.weight("fitness", ContentType::Project, "tracker"), HIGH);
        assert_eq!(index.weight("workout", ContentType::Project, "tracker"), MEDIUM);
        assert_eq!(index.weight("charts", ContentType::Project, "tracker"), LOW);
        assert_eq!(index.weight("acme", ContentType::Experience, "acme"), HIGH);
        assert_eq!(index.weight("spark", ContentType::Experience, "acme"), LOW);
    }

    #[test]
    fn test_repeated_keyword_across_fields_accumulates() {
        let index = build_keyword_index(&small_registry());
        // "retrieval" appears in the title (×3) and in the keyword phrase (×3).
        assert_eq!(index.weight("retrieval", ContentType::Paper, "retrieval"), 6);
    }

    #[test]
    fn test_multiword_phrases_indexed_whole() {
        let index = build_keyword_index(&small_registry());
        assert!(index.postings("react native").is_some());
        assert!(index.postings("information retrieval").is_some());
        assert!(index.postings("machine learning").is_some());
    }

    #[test]
    fn test_missing_concentration_is_skipped() {
        let index = build_keyword_index(&small_registry());
        assert_eq!(index.weight("college", ContentType::Education, "college"), HIGH);
    }

    #[test]
    fn test_skill_mappings_link_content() {
        let index = build_keyword_index(&small_registry());
        assert_eq!(index.weight("machine", ContentType::Experience, "acme"), LOW);
        assert_eq!(index.weight("learning", ContentType::Education, "college"), LOW);
    }

    #[test]
    fn test_every_indexed_id_matches_its_keyword() {
        let registry = ContentRegistry::portfolio();
        let index = build_keyword_index(registry);
        for keyword in index.keywords() {
            let postings = index.postings(keyword).unwrap();
            for ct in ContentType::INDEXED {
                for id in postings.bucket(ct).unwrap().keys() {
                    assert!(
                        index.content_matches_keywords(id, ct, &[keyword]),
                        "{ct} '{id}' should match keyword '{keyword}'"
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_registry_builds_empty_index() {
        let registry = ContentRegistry::new(vec![], vec![], vec![], vec![], vec![], vec![]);
        assert!(build_keyword_index(&registry).is_empty());
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ContentRegistry, ContentType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    DuplicateSkillMapping,
    UnknownSkill,
    DanglingReference,
    DuplicateId,
    EmptyId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryIssue {
    pub kind: IssueKind,
    pub subject: String,
    pub description: String,
}

impl std::fmt::Display for RegistryIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.subject, self.description)
    }
}

/// Checks the catalog's structural invariants.
///
/// - skill mapping names are unique (case-insensitive)
/// - every mapped skill exists in the master taxonomy
/// - every mapped id resolves to an entity of the right type
/// - entity ids are non-empty and unique per content type
///
/// An empty result means the registry is consistent.
pub fn validate_registry(registry: &ContentRegistry) -> Vec<RegistryIssue> {
    let mut issues = Vec::new();

    check_ids(
        &mut issues,
        ContentType::Project,
        registry.projects().iter().map(|p| p.id.as_str()),
    );
    check_ids(
        &mut issues,
        ContentType::Experience,
        registry.experiences().iter().map(|e| e.id.as_str()),
    );
    check_ids(
        &mut issues,
        ContentType::Paper,
        registry.papers().iter().map(|p| p.id.as_str()),
    );
    check_ids(
        &mut issues,
        ContentType::Education,
        registry.education().iter().map(|e| e.id.as_str()),
    );

    let mut seen_skills = HashSet::new();
    for mapping in registry.skill_mappings() {
        if !seen_skills.insert(mapping.skill.to_lowercase()) {
            issues.push(RegistryIssue {
                kind: IssueKind::DuplicateSkillMapping,
                subject: mapping.skill.clone(),
                description: "skill appears in more than one mapping".to_string(),
            });
        }

        if !registry.is_known_skill(&mapping.skill) {
            issues.push(RegistryIssue {
                kind: IssueKind::UnknownSkill,
                subject: mapping.skill.clone(),
                description: "mapped skill is missing from the skill taxonomy".to_string(),
            });
        }

        let edges = [
            (ContentType::Experience, &mapping.experience_ids),
            (ContentType::Project, &mapping.project_ids),
            (ContentType::Education, &mapping.education_ids),
        ];
        for (content_type, ids) in edges {
            for id in ids {
                if !registry.contains(content_type, id) {
                    issues.push(RegistryIssue {
                        kind: IssueKind::DanglingReference,
                        subject: mapping.skill.clone(),
                        description: format!("references unknown {content_type} '{id}'"),
                    });
                }
            }
        }
    }

    issues
}

fn check_ids<'a>(
    issues: &mut Vec<RegistryIssue>,
    content_type: ContentType,
    ids: impl Iterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            issues.push(RegistryIssue {
                kind: IssueKind::EmptyId,
                subject: content_type.to_string(),
                description: format!("{content_type} entry has an empty id"),
            });
        } else if !seen.insert(id) {
            issues.push(RegistryIssue {
                kind: IssueKind::DuplicateId,
                subject: id.to_string(),
                description: format!("id used by more than one {content_type}"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Experience, SkillCategory, SkillMapping};

    fn experience(id: &str) -> Experience {
        Experience {
            id: id.to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: String::new(),
            achievements: vec![],
        }
    }

    fn mapping(skill: &str, experience_ids: &[&str]) -> SkillMapping {
        SkillMapping {
            skill: skill.to_string(),
            experience_ids: experience_ids.iter().map(|s| s.to_string()).collect(),
            project_ids: vec![],
            education_ids: vec![],
        }
    }

    fn registry(experiences: Vec<Experience>, mappings: Vec<SkillMapping>) -> ContentRegistry {
        ContentRegistry::new(
            vec![],
            experiences,
            vec![],
            vec![],
            vec![SkillCategory {
                name: "Languages".to_string(),
                skills: vec!["Python".to_string(), "SQL".to_string()],
            }],
            mappings,
        )
    }

    #[test]
    fn test_builtin_portfolio_is_consistent() {
        let issues = validate_registry(ContentRegistry::portfolio());
        assert!(issues.is_empty(), "Unexpected issues: {issues:?}");
    }

    #[test]
    fn test_duplicate_skill_mapping_flagged() {
        let reg = registry(
            vec![experience("acme")],
            vec![mapping("Python", &["acme"]), mapping("python", &[])],
        );
        let issues = validate_registry(&reg);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::DuplicateSkillMapping);
    }

    #[test]
    fn test_dangling_reference_flagged() {
        let reg = registry(vec![experience("acme")], vec![mapping("SQL", &["globex"])]);
        let issues = validate_registry(&reg);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::DanglingReference);
        assert!(issues[0].description.contains("globex"));
    }

    #[test]
    fn test_unknown_skill_flagged() {
        let reg = registry(vec![], vec![mapping("Cobol", &[])]);
        let issues = validate_registry(&reg);
        assert_eq!(issues[0].kind, IssueKind::UnknownSkill);
    }

    #[test]
    fn test_duplicate_and_empty_ids_flagged() {
        let reg = registry(
            vec![experience("acme"), experience("acme"), experience(" ")],
            vec![],
        );
        let kinds: Vec<_> = validate_registry(&reg).into_iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::DuplicateId, IssueKind::EmptyId]);
    }
}

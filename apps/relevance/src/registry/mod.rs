// Content Registry: the static portfolio catalog every other module reads from.
// Loaded once, never mutated. Tests and callers may build their own registry
// and inject it; the built-in catalog lives behind `ContentRegistry::portfolio()`.

pub mod catalog;
pub mod models;
pub mod validation;

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

pub use models::{
    ContentType, Education, Experience, Paper, Project, SkillCategory, SkillMapping,
};

static PORTFOLIO: LazyLock<Arc<ContentRegistry>> = LazyLock::new(|| {
    Arc::new(ContentRegistry::new(
        catalog::projects(),
        catalog::experiences(),
        catalog::papers(),
        catalog::education(),
        catalog::skill_categories(),
        catalog::skill_mappings(),
    ))
});

/// Immutable collection of every entity the relevance engine can surface.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    projects: Vec<Project>,
    experiences: Vec<Experience>,
    papers: Vec<Paper>,
    education: Vec<Education>,
    skill_mappings: Vec<SkillMapping>,
    /// Ordered, deduplicated union of all category skill lists.
    skill_taxonomy: Vec<String>,
}

impl ContentRegistry {
    pub fn new(
        projects: Vec<Project>,
        experiences: Vec<Experience>,
        papers: Vec<Paper>,
        education: Vec<Education>,
        skill_categories: Vec<SkillCategory>,
        skill_mappings: Vec<SkillMapping>,
    ) -> Self {
        let mut seen = HashSet::new();
        let skill_taxonomy = skill_categories
            .into_iter()
            .flat_map(|c| c.skills)
            .filter(|s| seen.insert(s.to_lowercase()))
            .collect();

        Self {
            projects,
            experiences,
            papers,
            education,
            skill_mappings,
            skill_taxonomy,
        }
    }

    /// The built-in portfolio catalog, built on first access.
    pub fn portfolio() -> &'static ContentRegistry {
        &PORTFOLIO
    }

    /// Shared handle to the built-in catalog, for services that hold it.
    pub fn shared() -> Arc<ContentRegistry> {
        Arc::clone(&*PORTFOLIO)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn skill_mappings(&self) -> &[SkillMapping] {
        &self.skill_mappings
    }

    pub fn skill_taxonomy(&self) -> &[String] {
        &self.skill_taxonomy
    }

    /// Case-insensitive taxonomy membership check.
    pub fn is_known_skill(&self, skill: &str) -> bool {
        self.skill_taxonomy
            .iter()
            .any(|s| s.eq_ignore_ascii_case(skill))
    }

    /// Returns the canonical spelling of a taxonomy skill, if present.
    pub fn canonical_skill(&self, skill: &str) -> Option<&str> {
        self.skill_taxonomy
            .iter()
            .find(|s| s.eq_ignore_ascii_case(skill))
            .map(String::as_str)
    }

    /// Whether an entity of the given type with this id exists.
    pub fn contains(&self, content_type: ContentType, id: &str) -> bool {
        match content_type {
            ContentType::Project => self.projects.iter().any(|p| p.id == id),
            ContentType::Experience => self.experiences.iter().any(|e| e.id == id),
            ContentType::Paper => self.papers.iter().any(|p| p.id == id),
            ContentType::Education => self.education.iter().any(|e| e.id == id),
            ContentType::Other => false,
        }
    }
}

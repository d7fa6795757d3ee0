use serde::{Deserialize, Serialize};

/// Vocabulary signalling interest in papers and research.
const PAPER_INTENT_TERMS: &[&str] = &[
    "paper",
    "papers",
    "research",
    "researched",
    "researcher",
    "researchers",
    "researching",
    "publication",
    "publications",
    "published",
    "publishing",
    "publish",
    "article",
    "articles",
    "journal",
    "thesis",
    "study",
    "studies",
    "academic",
    "scholarly",
];

/// Vocabulary signalling interest in projects and built work.
const PROJECT_INTENT_TERMS: &[&str] = &[
    "project",
    "projects",
    "work",
    "built",
    "build",
    "building",
    "portfolio",
    "app",
    "apps",
    "application",
    "applications",
    "side project",
    "open source",
];

/// Vocabulary signalling interest in jobs and career history.
const EXPERIENCE_INTENT_TERMS: &[&str] = &[
    "experience",
    "experiences",
    "job",
    "jobs",
    "career",
    "employment",
    "employer",
    "employed",
    "employers",
    "company",
    "companies",
    "role",
    "roles",
    "position",
    "positions",
    "internship",
    "internships",
    "intern",
    "worked",
    "professional",
    "work history",
    "worked on",
];

/// Which content categories a query explicitly asks about. Several can be true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryIntent {
    pub paper: bool,
    pub project: bool,
    pub experience: bool,
}

impl QueryIntent {
    pub fn detect(query: &str) -> Self {
        let lowered = query.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric() && c != '-')
            .filter(|w| !w.is_empty())
            .collect();

        let mentions = |terms: &[&str]| {
            terms.iter().any(|term| {
                if term.contains(' ') {
                    lowered.contains(term)
                } else {
                    words.contains(term)
                }
            })
        };

        Self {
            paper: mentions(PAPER_INTENT_TERMS),
            project: mentions(PROJECT_INTENT_TERMS),
            experience: mentions(EXPERIENCE_INTENT_TERMS),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.paper || self.project || self.experience)
    }
}

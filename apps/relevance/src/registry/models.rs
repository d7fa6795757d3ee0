use serde::{Deserialize, Serialize};

/// Kind of content a search result or index posting refers to.
///
/// `Other` absorbs upstream result types the registry does not index
/// (e.g. `skill`, `blog`); they never match the keyword index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Project,
    Experience,
    Paper,
    Education,
    #[serde(other)]
    Other,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Project => "project",
            ContentType::Experience => "experience",
            ContentType::Paper => "paper",
            ContentType::Education => "education",
            ContentType::Other => "other",
        }
    }

    /// Content types that the keyword index holds postings for.
    pub const INDEXED: [ContentType; 4] = [
        ContentType::Project,
        ContentType::Experience,
        ContentType::Paper,
        ContentType::Education,
    ];
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub categories: Vec<String>,
    pub status: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paper {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub institution: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub concentration: Option<String>,
}

/// Edges from a canonical skill name to every content item that exercises it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillMapping {
    pub skill: String,
    pub experience_ids: Vec<String>,
    pub project_ids: Vec<String>,
    pub education_ids: Vec<String>,
}

/// A named group of skills. The master taxonomy is the union of all categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

// Job Matcher
// Extracts skills from a job description (alias table + taxonomy scan) and walks
// the skill-mapping graph to the experiences, projects and education behind them.

pub mod aliases;
pub mod matcher;
pub mod skills;

pub use matcher::{compute_match_score, match_job_description, match_job_description_with, MatchResult};
pub use skills::{extract_matched_skills, extract_matched_skills_with};

//! Declarative skill-matching rules.
//!
//! `KEYWORD_TO_SKILLS` maps a lowercase phrase found in a job description to the
//! canonical taxonomy skills it implies. Extend the table to teach the matcher
//! new vocabulary; the matching logic does not change.

/// Phrase → canonical skills. Targets missing from the taxonomy are ignored.
pub const KEYWORD_TO_SKILLS: &[(&str, &[&str])] = &[
    // machine learning and data
    ("machine learning", &["Tensorflow", "Pytorch", "Sklearn", "Python"]),
    ("deep learning", &["Tensorflow", "Pytorch", "Python"]),
    ("artificial intelligence", &["Tensorflow", "Pytorch", "Python"]),
    ("neural network", &["Tensorflow", "Pytorch"]),
    ("computer vision", &["Pytorch", "Tensorflow", "Python"]),
    ("natural language processing", &["Pytorch", "Python"]),
    ("nlp", &["Pytorch", "Python"]),
    ("data science", &["Python", "Pandas", "NumPy", "Sklearn"]),
    ("data analysis", &["Python", "Pandas", "SQL"]),
    ("data engineering", &["Spark", "SQL", "Python"]),
    ("big data", &["Spark"]),
    ("statistics", &["Python", "Pandas"]),
    ("scikit-learn", &["Sklearn"]),
    ("keras", &["Tensorflow"]),
    ("embeddings", &["pgvector", "Python"]),
    ("vector search", &["pgvector", "PostgreSQL"]),
    // web
    ("frontend", &["React", "TypeScript", "JavaScript", "HTML", "CSS"]),
    ("front-end", &["React", "TypeScript", "JavaScript", "HTML", "CSS"]),
    ("front end", &["React", "TypeScript", "JavaScript", "HTML", "CSS"]),
    ("backend", &["Node.js", "PostgreSQL", "REST APIs"]),
    ("back-end", &["Node.js", "PostgreSQL", "REST APIs"]),
    ("back end", &["Node.js", "PostgreSQL", "REST APIs"]),
    ("full stack", &["React", "Node.js", "TypeScript", "PostgreSQL"]),
    ("full-stack", &["React", "Node.js", "TypeScript", "PostgreSQL"]),
    ("fullstack", &["React", "Node.js", "TypeScript", "PostgreSQL"]),
    ("web development", &["React", "JavaScript", "HTML", "CSS"]),
    ("reactjs", &["React"]),
    ("nextjs", &["Next.js"]),
    ("nodejs", &["Node.js"]),
    ("node", &["Node.js"]),
    ("tailwind", &["Tailwind CSS"]),
    ("mobile", &["React Native"]),
    ("restful", &["REST APIs"]),
    ("apis", &["REST APIs", "GraphQL"]),
    ("microservices", &["Docker", "Kubernetes", "Node.js"]),
    // .NET
    (".net", &[".NET", "C#", "ASP.NET Core"]),
    ("dotnet", &[".NET", "C#", "ASP.NET Core"]),
    ("csharp", &["C#"]),
    // cloud and operations
    ("cloud", &["AWS", "Docker"]),
    ("amazon web services", &["AWS"]),
    ("serverless", &["AWS"]),
    ("devops", &["Docker", "Kubernetes", "Terraform", "GitHub Actions"]),
    ("ci/cd", &["GitHub Actions", "Docker"]),
    ("continuous integration", &["GitHub Actions"]),
    ("containers", &["Docker", "Kubernetes"]),
    ("containerization", &["Docker", "Kubernetes"]),
    ("orchestration", &["Kubernetes"]),
    ("k8s", &["Kubernetes"]),
    ("infrastructure as code", &["Terraform"]),
    ("version control", &["Git", "Github"]),
    ("source control", &["Git"]),
    // data stores
    ("database", &["PostgreSQL", "SQL", "MongoDB"]),
    ("relational", &["PostgreSQL", "SQL"]),
    ("postgres", &["PostgreSQL"]),
    ("nosql", &["MongoDB", "Redis"]),
    ("mongo", &["MongoDB"]),
    ("caching", &["Redis"]),
    // systems and quantum
    ("embedded", &["C", "C++"]),
    ("systems programming", &["C", "C++"]),
    ("firmware", &["C", "C++"]),
    ("quantum", &["Qiskit", "Quantum Computing"]),
];

/// Version-control tooling is mentioned in nearly every posting; matching it
/// would link almost every experience to almost every job.
pub const EXCLUDED_SKILLS: &[&str] = &["github", "git", "gitlab", "bitbucket"];

pub fn is_excluded_skill(skill: &str) -> bool {
    EXCLUDED_SKILLS
        .iter()
        .any(|excluded| excluded.eq_ignore_ascii_case(skill))
}

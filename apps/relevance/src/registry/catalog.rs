//! Built-in portfolio catalog.
//!
//! Plain data. Ids are stable slugs; skill mappings reference them directly.

use super::models::{Education, Experience, Paper, Project, SkillCategory, SkillMapping};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "quantum-ide".to_string(),
            title: "Quantum IDE".to_string(),
            subtitle: "Browser-based quantum circuit playground".to_string(),
            description: "An in-browser editor for a small quantum programming language with a \
                          live circuit visualizer and a state-vector simulator."
                .to_string(),
            technologies: strings(&["TypeScript", "React", "Next.js", "Qiskit"]),
            categories: strings(&["Quantum Computing", "Web Development"]),
            status: "Live".to_string(),
            period: "2024".to_string(),
        },
        Project {
            id: "portfolio-search".to_string(),
            title: "Semantic Portfolio Search".to_string(),
            subtitle: "Natural-language search over personal work".to_string(),
            description: "Vector search over embeddings of projects, papers and experience, \
                          re-ranked with lexical signals so exact technology names still win."
                .to_string(),
            technologies: strings(&["Python", "PostgreSQL", "pgvector", "AWS", "Docker"]),
            categories: strings(&["Machine Learning", "Search"]),
            status: "Live".to_string(),
            period: "2024 - Present".to_string(),
        },
        Project {
            id: "fitness-tracker".to_string(),
            title: "Fitness Tracker".to_string(),
            subtitle: "Cross-platform workout logging app".to_string(),
            description: "Mobile app that syncs workouts from wearable devices and charts \
                          training volume over time."
                .to_string(),
            technologies: strings(&["React Native", "Node.js", "MongoDB"]),
            categories: strings(&["Mobile", "Health"]),
            status: "Archived".to_string(),
            period: "2023".to_string(),
        },
        Project {
            id: "stock-forecasting".to_string(),
            title: "Stock Forecasting Model".to_string(),
            subtitle: "Sequence models for equity price movement".to_string(),
            description: "Compared LSTM and gradient boosted baselines for next-day direction \
                          prediction with walk-forward validation."
                .to_string(),
            technologies: strings(&["Python", "Pytorch", "Tensorflow", "Sklearn", "Pandas"]),
            categories: strings(&["Machine Learning", "Data Science"]),
            status: "Completed".to_string(),
            period: "2023".to_string(),
        },
        Project {
            id: "inventory-system".to_string(),
            title: "Inventory Management System".to_string(),
            subtitle: "Stock tracking for a small retail chain".to_string(),
            description: "Multi-store inventory service with barcode intake, reorder alerts \
                          and role-based access for store managers."
                .to_string(),
            technologies: strings(&["C#", "ASP.NET Core", ".NET", "SQL Server"]),
            categories: strings(&["Backend", "Enterprise"]),
            status: "Completed".to_string(),
            period: "2022".to_string(),
        },
        Project {
            id: "weather-station".to_string(),
            title: "Embedded Weather Station".to_string(),
            subtitle: "Low-power sensor node".to_string(),
            description: "Microcontroller firmware that samples temperature, humidity and \
                          pressure sensors and reports readings over LoRa."
                .to_string(),
            technologies: strings(&["C", "C++", "Arduino"]),
            categories: strings(&["Embedded Systems", "Hardware"]),
            status: "Completed".to_string(),
            period: "2021".to_string(),
        },
    ]
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "suno-analytics".to_string(),
            title: "Software Engineer".to_string(),
            company: "Suno Analytics".to_string(),
            location: "Remote".to_string(),
            description: "Built customer-facing analytics dashboards for e-commerce brands on \
                          a serverless cloud backend."
                .to_string(),
            achievements: strings(&[
                "Shipped a React dashboard used daily by over 200 merchants",
                "Cut report generation latency by 60% by moving batch jobs to AWS Lambda",
                "Designed the Node.js ingestion service for marketplace sales data",
            ]),
        },
        Experience {
            id: "patelco".to_string(),
            title: "Software Engineering Intern".to_string(),
            company: "Patelco Credit Union".to_string(),
            location: "Pleasanton, CA".to_string(),
            description: "Developed internal tooling for member services and loan operations \
                          teams."
                .to_string(),
            achievements: strings(&[
                "Rewrote a legacy member lookup tool in TypeScript",
                "Automated weekly loan reconciliation reports with SQL",
            ]),
        },
        Experience {
            id: "berkeley-lab".to_string(),
            title: "Undergraduate Research Assistant".to_string(),
            company: "Lawrence Berkeley National Laboratory".to_string(),
            location: "Berkeley, CA".to_string(),
            description: "Researched error mitigation techniques for near-term quantum \
                          hardware."
                .to_string(),
            achievements: strings(&[
                "Implemented noise-aware circuit transpilation passes in Qiskit",
                "Trained Pytorch surrogate models to predict hardware noise profiles",
                "Co-authored a paper on variational algorithm error mitigation",
            ]),
        },
        Experience {
            id: "kaiser".to_string(),
            title: "Data Engineering Intern".to_string(),
            company: "Kaiser Permanente".to_string(),
            location: "Oakland, CA".to_string(),
            description: "Maintained clinical data pipelines feeding population health \
                          dashboards."
                .to_string(),
            achievements: strings(&[
                "Migrated nightly ETL jobs from stored procedures to Spark",
                "Containerized pipeline workers with Docker for reproducible runs",
            ]),
        },
    ]
}

pub fn papers() -> Vec<Paper> {
    vec![
        Paper {
            id: "quantum-error-mitigation".to_string(),
            title: "Noise-Aware Error Mitigation for Variational Quantum Algorithms".to_string(),
            keywords: strings(&[
                "quantum computing",
                "error mitigation",
                "variational algorithms",
                "NISQ",
            ]),
            institution: "Lawrence Berkeley National Laboratory".to_string(),
            abstract_text: "We study how device calibration data can steer circuit \
                            transpilation to reduce the impact of gate noise on variational \
                            eigensolvers running on superconducting hardware."
                .to_string(),
        },
        Paper {
            id: "hybrid-retrieval".to_string(),
            title: "Hybrid Lexical-Semantic Retrieval for Personal Knowledge Bases".to_string(),
            keywords: strings(&[
                "information retrieval",
                "embeddings",
                "natural language processing",
            ]),
            institution: "University of California, Berkeley".to_string(),
            abstract_text: "Dense embeddings miss rare proper nouns while keyword search misses \
                            paraphrases. We evaluate score fusion strategies on small personal \
                            corpora."
                .to_string(),
        },
    ]
}

pub fn education() -> Vec<Education> {
    vec![
        Education {
            id: "uc-berkeley".to_string(),
            institution: "University of California, Berkeley".to_string(),
            degree: "B.A. Computer Science".to_string(),
            concentration: Some("Data Science".to_string()),
        },
        Education {
            id: "de-anza".to_string(),
            institution: "De Anza College".to_string(),
            degree: "A.S. Mathematics".to_string(),
            concentration: None,
        },
    ]
}

pub fn skill_categories() -> Vec<SkillCategory> {
    let category = |name: &str, skills: &[&str]| SkillCategory {
        name: name.to_string(),
        skills: strings(skills),
    };

    vec![
        category(
            "Languages",
            &["Python", "TypeScript", "JavaScript", "C", "C++", "C#", "SQL"],
        ),
        category(
            "Frontend",
            &["React", "React Native", "Next.js", "Tailwind CSS", "HTML", "CSS"],
        ),
        category(
            "Backend",
            &["Node.js", "ASP.NET Core", ".NET", "GraphQL", "REST APIs", "FastAPI"],
        ),
        category(
            "Cloud & DevOps",
            &[
                "AWS",
                "Docker",
                "Kubernetes",
                "Terraform",
                "GitHub Actions",
                "Github",
                "Git",
            ],
        ),
        category(
            "Data & Machine Learning",
            &[
                "Tensorflow",
                "Pytorch",
                "Sklearn",
                "Pandas",
                "NumPy",
                "Spark",
                "PostgreSQL",
                "MongoDB",
                "Redis",
                "pgvector",
            ],
        ),
        category("Quantum", &["Qiskit", "Quantum Computing"]),
    ]
}

pub fn skill_mappings() -> Vec<SkillMapping> {
    let mapping = |skill: &str, experiences: &[&str], projects: &[&str], education: &[&str]| {
        SkillMapping {
            skill: skill.to_string(),
            experience_ids: strings(experiences),
            project_ids: strings(projects),
            education_ids: strings(education),
        }
    };

    vec![
        mapping(
            "Python",
            &["berkeley-lab", "kaiser"],
            &["portfolio-search", "stock-forecasting"],
            &["uc-berkeley"],
        ),
        mapping("TypeScript", &["patelco"], &["quantum-ide"], &[]),
        mapping("JavaScript", &["patelco"], &["fitness-tracker"], &[]),
        mapping("React", &["suno-analytics"], &["quantum-ide"], &[]),
        mapping("React Native", &[], &["fitness-tracker"], &[]),
        mapping("Next.js", &[], &["quantum-ide"], &[]),
        mapping("Node.js", &["suno-analytics"], &["fitness-tracker"], &[]),
        mapping("AWS", &["suno-analytics"], &["portfolio-search"], &[]),
        mapping("Docker", &["kaiser"], &["portfolio-search"], &[]),
        mapping("PostgreSQL", &["patelco"], &["portfolio-search"], &[]),
        mapping("SQL", &["patelco", "kaiser"], &["inventory-system"], &[]),
        mapping("MongoDB", &[], &["fitness-tracker"], &[]),
        mapping("Pytorch", &["berkeley-lab"], &["stock-forecasting"], &[]),
        mapping("Tensorflow", &[], &["stock-forecasting"], &[]),
        mapping("Sklearn", &[], &["stock-forecasting"], &["uc-berkeley"]),
        mapping("Pandas", &["kaiser"], &["stock-forecasting"], &["uc-berkeley"]),
        mapping("Spark", &["kaiser"], &[], &[]),
        mapping("Qiskit", &["berkeley-lab"], &["quantum-ide"], &[]),
        mapping(
            "Quantum Computing",
            &["berkeley-lab"],
            &["quantum-ide"],
            &["uc-berkeley"],
        ),
        mapping("C#", &[], &["inventory-system"], &[]),
        mapping(".NET", &[], &["inventory-system"], &[]),
        mapping("ASP.NET Core", &[], &["inventory-system"], &[]),
        mapping("C", &[], &["weather-station"], &["de-anza"]),
        mapping("C++", &[], &["weather-station"], &["de-anza"]),
        mapping("pgvector", &[], &["portfolio-search"], &[]),
        mapping("GitHub Actions", &[], &["portfolio-search"], &[]),
        mapping(
            "Github",
            &["suno-analytics", "patelco"],
            &["quantum-ide", "portfolio-search"],
            &[],
        ),
    ]
}

//! Keyword spotting against two fixed vocabularies.

/// Technology terms, scanned first.
pub const TECH_KEYWORDS: &[&str] = &[
    "JavaScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "HTML",
    "CSS",
    "TypeScript",
    "Vue.js",
    "Angular",
    "MongoDB",
    "SQL",
    "Git",
    "Docker",
    "AWS",
    "Azure",
    "Kubernetes",
    "API",
    "REST",
    "GraphQL",
    "Agile",
    "Scrum",
];

/// Soft-skill terms, scanned after the technology list.
pub const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "leadership",
    "communication",
    "gestion",
    "analyse",
    "créativité",
    "autonomie",
    "équipe",
    "projet",
    "innovation",
    "stratégie",
];

/// Returns every known keyword contained in `text`, ignoring case.
///
/// Plain substring containment: "Java" also matches inside "JavaScript".
/// Order follows the vocabularies, technology terms first.
pub fn extract_keywords(text: &str) -> Vec<&'static str> {
    let haystack = text.to_lowercase();
    TECH_KEYWORDS
        .iter()
        .chain(SOFT_SKILL_KEYWORDS)
        .copied()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .collect()
}

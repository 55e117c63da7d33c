//! Job-title extraction through an ordered list of regex alternatives.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// One title rule: the pattern, and how to pull the title out of a match.
pub struct TitlePattern {
    pub regex: Regex,
    pub extract: fn(&Captures<'_>) -> Option<String>,
}

fn first_group_trimmed(captures: &Captures<'_>) -> Option<String> {
    captures
        .get(1)
        .map(|m| m.as_str().trim().to_string())
}

/// Title rules in precedence order. The first rule that matches wins,
/// even when a later rule would match earlier in the text.
pub static TITLE_PATTERNS: LazyLock<Vec<TitlePattern>> = LazyLock::new(|| {
    [
        r"(?i)recherchons une? ([^.\n]+)",
        r"(?i)poste de ([^.\n]+)",
        r"(?i)nous recrutons une? ([^.\n]+)",
        r"(?i)titre du poste[:\s]+([^.\n]+)",
    ]
    .into_iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .map(|regex| TitlePattern {
        regex,
        extract: first_group_trimmed,
    })
    .collect()
});

/// Extracts a candidate job title from a job description.
pub fn extract_job_title(text: &str) -> Option<String> {
    TITLE_PATTERNS.iter().find_map(|pattern| {
        pattern
            .regex
            .captures(text)
            .and_then(|captures| (pattern.extract)(&captures))
    })
}

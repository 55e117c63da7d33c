//! Heuristic mode — a local stand-in for the LLM rewrite.
//!
//! No model, no network: spot keywords from fixed vocabularies, guess the job
//! title, then wrap the untouched resume between an objective paragraph and a
//! keyword summary. It is a placeholder, not an optimization algorithm.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::form::{FormError, OptimizationRequest, Optimizer};

pub mod job_title;
pub mod keywords;

pub use job_title::extract_job_title;
pub use keywords::extract_keywords;

/// Artificial latency so the form's busy state is visible.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// How many keywords make it into the summary section.
const SUMMARY_KEYWORD_LIMIT: usize = 8;

const FALLBACK_TITLE: &str = "Poste visé";

/// Builds the "optimized" resume from plain text templates.
pub fn simulate_optimization(resume: &str, job_description: &str) -> String {
    let keywords = extract_keywords(job_description);
    // A pattern can match with nothing but whitespace after it.
    let job_title = extract_job_title(job_description).filter(|title| !title.is_empty());

    let mut optimized = String::with_capacity(resume.len() + 512);

    if let Some(title) = &job_title {
        optimized.push_str(&format!(
            "# OBJECTIF PROFESSIONNEL\n\nRecherche un poste de {title} où je pourrai mettre à profit \
             mes compétences et mon expérience pour contribuer au succès de l'entreprise.\n\n"
        ));
    }

    optimized.push_str(resume);

    let summary = keywords
        .iter()
        .take(SUMMARY_KEYWORD_LIMIT)
        .copied()
        .collect::<Vec<_>>()
        .join(" • ");
    optimized.push_str(&format!("\n\n## MOTS-CLÉS PERTINENTS\n{summary}\n"));

    optimized.push_str(&format!(
        "\n\n---\n✨ CV OPTIMISÉ AUTOMATIQUEMENT ✨\nAdapté pour le poste : {}\nMots-clés intégrés : {} détectés\n---",
        job_title.as_deref().unwrap_or(FALLBACK_TITLE),
        keywords.len()
    ));

    optimized
}

/// `Optimizer` backend for the offline build of the form.
#[derive(Debug, Clone)]
pub struct HeuristicOptimizer {
    delay: Duration,
}

impl HeuristicOptimizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for HeuristicOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl Optimizer for HeuristicOptimizer {
    async fn optimize(&self, request: &OptimizationRequest) -> Result<String, FormError> {
        tokio::time::sleep(self.delay).await;
        let optimized = simulate_optimization(&request.resume, &request.job_description);
        debug!("Heuristic optimization produced {} bytes", optimized.len());
        Ok(optimized)
    }
}

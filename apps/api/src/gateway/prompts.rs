// Prompt constants for the optimize endpoint.

/// Resume rewrite prompt. Replace `{resume}` and `{job_description}` before sending.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = "Tu es un expert en recrutement et optimisation de CV. \
J'ai un CV et une description de poste. Adapte le CV pour maximiser les chances d'être retenu pour ce poste.

CV ACTUEL:
{resume}

DESCRIPTION DU POSTE:
{job_description}

CONSIGNES:
- Réorganise le CV pour mettre en avant les éléments les plus pertinents pour ce poste
- Reformule les expériences en utilisant des mots-clés de la description du poste
- Quantifie les réalisations quand c'est possible
- Garde un format professionnel et structuré
- Assure-toi que le CV reste authentique et véridique
- Améliore la présentation sans inventer d'informations

IMPORTANT: Réponds UNIQUEMENT avec le CV optimisé en format texte, sans commentaires supplémentaires.";

/// Interpolates both fields verbatim into the rewrite template.
///
/// The job description is substituted first so a resume that happens to contain
/// the literal `{job_description}` placeholder is left untouched.
pub fn build_optimize_prompt(resume: &str, job_description: &str) -> String {
    let (head, tail) = OPTIMIZE_PROMPT_TEMPLATE
        .split_once("{resume}")
        .unwrap_or((OPTIMIZE_PROMPT_TEMPLATE, ""));
    format!(
        "{head}{resume}{}",
        tail.replace("{job_description}", job_description)
    )
}

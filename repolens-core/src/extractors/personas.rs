//! Persona inference

use super::push_unique_by;
use crate::constants::limits::MAX_PERSONAS;
use crate::models::{Persona, UserContext};

/// `(role, pain, benefit)` offered to every repository
pub const PERSONA_CANDIDATES: &[(&str, &str, &str)] = &[
    (
        "Software Engineer",
        "Needs maintainable implementation details and fast onboarding.",
        "Clear architecture and setup paths reduce delivery time.",
    ),
    (
        "Platform/DevOps Engineer",
        "Needs reliable deployment and automation coverage.",
        "Tooling and workflow conventions improve operational consistency.",
    ),
    (
        "Product Builder",
        "Needs user-facing value with predictable development effort.",
        "Feature-oriented components enable faster iteration.",
    ),
    (
        "Engineering Leader",
        "Needs confidence in maintainability and project momentum.",
        "Metrics and release signals support governance and investment decisions.",
    ),
];

/// Leads the candidates when the project looks data or ML oriented
pub const DATA_PERSONA: (&str, &str, &str) = (
    "Data/ML Engineer",
    "Needs production-ready patterns for data workflows.",
    "Combines experimentation and delivery through practical project structure.",
);

const DATA_SIGNALS: &[&str] = &["data", "ml", "ai"];

fn persona((role, pain, benefit): &(&str, &str, &str)) -> Persona {
    Persona { role: role.to_string(), pain: pain.to_string(), benefit: benefit.to_string() }
}

/// User personas first, then catalogue roles not already named
///
/// `project_name` is the raw metadata name; blank falls back to "the project".
pub fn infer_personas(readme: &str, topics: &[String], project_name: Option<&str>, context: &UserContext) -> Vec<Persona> {
    let project = project_name.unwrap_or("the project");
    let mut personas: Vec<Persona> = context
        .persona_list()
        .into_iter()
        .map(|role| Persona {
            role,
            pain: format!("Needs a reliable way to execute {project} outcomes quickly."),
            benefit: "Gets a structured, reusable implementation with less uncertainty.".to_string(),
        })
        .collect();

    let text = format!("{} {}", readme, topics.join(" ")).to_lowercase();
    let data_oriented = DATA_SIGNALS.iter().any(|signal| text.contains(signal));

    let candidates = data_oriented
        .then_some(&DATA_PERSONA)
        .into_iter()
        .chain(PERSONA_CANDIDATES.iter());
    for candidate in candidates {
        push_unique_by(&mut personas, persona(candidate), |existing| existing.role.clone());
    }

    personas.truncate(MAX_PERSONAS);
    personas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(personas: &[Persona]) -> Vec<&str> {
        personas.iter().map(|p| p.role.as_str()).collect()
    }

    #[test]
    fn test_catalogue_without_context() {
        let personas = infer_personas("A terminal tool", &[], Some("lens"), &UserContext::default());
        assert_eq!(
            roles(&personas),
            vec!["Software Engineer", "Platform/DevOps Engineer", "Product Builder", "Engineering Leader"]
        );
    }

    #[test]
    fn test_data_signal_prepends_data_persona() {
        let topics = vec!["data-pipeline".to_string()];
        let personas = infer_personas("", &topics, None, &UserContext::default());
        assert_eq!(personas[0].role, "Data/ML Engineer");
        assert_eq!(personas.len(), 5);

        let topics = vec!["ml-ops".to_string()];
        let personas = infer_personas("", &topics, None, &UserContext::default());
        assert_eq!(personas[0].role, "Data/ML Engineer");
    }

    #[test]
    fn test_spelled_out_machine_learning_is_not_a_data_signal() {
        let topics = vec!["machine-learning".to_string()];
        let personas = infer_personas("", &topics, None, &UserContext::default());
        assert_eq!(personas[0].role, "Software Engineer");
        assert_eq!(personas.len(), 4);
    }

    #[test]
    fn test_user_personas_lead_and_are_not_duplicated() {
        let context = UserContext::new().with_personas("Clinician\nSoftware Engineer; Analyst");
        let personas = infer_personas("", &[], Some("CarePath"), &context);

        assert_eq!(
            roles(&personas),
            vec!["Clinician", "Software Engineer", "Analyst", "Platform/DevOps Engineer", "Product Builder", "Engineering Leader"]
        );
        assert_eq!(personas[0].pain, "Needs a reliable way to execute CarePath outcomes quickly.");
        assert_eq!(personas[1].pain, "Needs a reliable way to execute CarePath outcomes quickly.");
    }

    #[test]
    fn test_personas_are_capped() {
        let context = UserContext::new().with_personas("A, B, C, D, E, F, G");
        let personas = infer_personas("", &[], None, &context);
        assert_eq!(personas.len(), MAX_PERSONAS);
        assert_eq!(personas[0].pain, "Needs a reliable way to execute the project outcomes quickly.");
    }
}

//! Narrative synthesis

use crate::models::UserContext;

pub const GENERIC_TAIL: &str =
    "Its strongest value is reducing implementation friction for teams shipping in iterative cycles.";

/// Lead, body and tail sentences joined into one paragraph
///
/// `project_name` is the raw metadata name; `description` is the resolved
/// (possibly generated) description.
pub fn build_narrative(project_name: Option<&str>, description: &str, context: &UserContext) -> String {
    let lead = format!(
        "{} exists to solve a practical delivery problem with a maintainable, open-source approach.",
        project_name.unwrap_or("This project")
    );
    let body = format!(
        "{}. It combines reusable technical foundations with documentation that helps teams move from setup to value quickly.",
        description.trim().trim_end_matches('.')
    );

    let use_cases = context.use_case_list();
    let tail = if context.industry().is_some() || !use_cases.is_empty() {
        format!(
            "The strongest fit is for {} focused on {}.",
            context.industry().unwrap_or("software teams"),
            use_cases.first().map_or("faster, lower-risk execution", String::as_str)
        )
    } else {
        GENERIC_TAIL.to_string()
    };

    format!("{lead} {body} {tail}")
}

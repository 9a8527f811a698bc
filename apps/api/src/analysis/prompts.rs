// Résumé review prompt. Only skills and experience are sent to the model.

/// Replace `{skills}` and `{experience}` before sending.
pub const REVIEW_PROMPT_TEMPLATE: &str = "Given these resume details:

Skills: {skills}
Experience: {experience}

1. Rate this resume out of 10.
2. Suggest improvement areas.
3. Suggest upskilling ideas and courses.
4. Highlight strong points.";

/// Rendered in place of a field the extraction did not produce.
pub const MISSING_VALUE: &str = "None";

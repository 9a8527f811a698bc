use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The nine fields pulled out of a résumé. Each is `null` on the wire when
/// the document did not yield it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub education: Option<Vec<String>>,
    pub experience: Option<Vec<String>>,
    pub companies: Option<Vec<String>>,
    pub designation: Option<Vec<String>>,
    /// Years, rounded to two decimals.
    pub total_experience: Option<f64>,
}

/// Serializes as `{}`. Matches nothing but an empty object when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NothingExtracted {}

/// Outcome of reading a résumé.
///
/// Wire shapes: `{"error": ...}`, `{}`, or the nine-field object.
/// Variant order matters for untagged deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extraction {
    Failed { error: String },
    Empty(NothingExtracted),
    Fields(ExtractedFields),
}

impl Extraction {
    pub fn empty() -> Self {
        Extraction::Empty(NothingExtracted {})
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Extraction::Failed {
            error: error.into(),
        }
    }

    pub fn fields(&self) -> Option<&ExtractedFields> {
        match self {
            Extraction::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Extraction::Failed { .. })
    }
}

/// Outcome of the LLM review: `{"analysis_text": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Analysis {
    Completed { analysis_text: String },
    Failed { error: String },
}

impl Analysis {
    pub fn is_failure(&self) -> bool {
        matches!(self, Analysis::Failed { .. })
    }
}

/// A persisted upload. Also the body returned by `POST /upload/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: i64,
    pub file_name: String,
    pub extracted: Extraction,
    pub analysis: Analysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ResumeSummary {
    pub id: i64,
    pub file_name: String,
}

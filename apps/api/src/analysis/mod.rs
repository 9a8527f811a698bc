//! Résumé analysis — one LLM review per upload.
//!
//! A missing credential is reported as `Analysis::Failed`; a failed model
//! call is returned as `Err` and aborts the upload.

pub mod prompts;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::analysis::prompts::{MISSING_VALUE, REVIEW_PROMPT_TEMPLATE};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::{Analysis, Extraction};

pub const MISSING_CREDENTIAL: &str = "Google API key not set";

/// Carried in `AppState` as `Arc<dyn Analyzer>`.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, extracted: &Extraction) -> Result<Analysis, LlmError>;
}

/// Default analyzer backed by Gemini. Holds no client when no key is configured.
pub struct LlmAnalyzer {
    llm: Option<LlmClient>,
}

impl LlmAnalyzer {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Analyzer for LlmAnalyzer {
    async fn analyze(&self, extracted: &Extraction) -> Result<Analysis, LlmError> {
        let Some(llm) = &self.llm else {
            warn!("Skipping analysis: {MISSING_CREDENTIAL}");
            return Ok(Analysis::Failed {
                error: MISSING_CREDENTIAL.to_string(),
            });
        };

        let prompt = render_review_prompt(extracted);
        let analysis_text = llm.call_text(&prompt).await?;
        info!(
            "Analysis received from {} ({} chars)",
            llm.model(),
            analysis_text.len()
        );

        Ok(Analysis::Completed { analysis_text })
    }
}

/// Fills the review template. Absent fields, and any extraction that is
/// empty or failed, render as `None`.
pub fn render_review_prompt(extracted: &Extraction) -> String {
    let fields = extracted.fields();
    let skills = render_list(fields.and_then(|f| f.skills.as_deref()));
    let experience = render_list(fields.and_then(|f| f.experience.as_deref()));

    REVIEW_PROMPT_TEMPLATE
        .replace("{skills}", &skills)
        .replace("{experience}", &experience)
}

fn render_list(values: Option<&[String]>) -> String {
    match values {
        Some(values) => values.join(", "),
        None => MISSING_VALUE.to_string(),
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::extraction::Extractor;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ResumeStore,
    /// Where uploaded files are written, under their client-supplied names.
    pub upload_dir: PathBuf,
    /// Pluggable extractor. Default: DocumentExtractor.
    pub extractor: Arc<dyn Extractor>,
    /// Pluggable analyzer. Default: LlmAnalyzer (Gemini).
    pub analyzer: Arc<dyn Analyzer>,
}

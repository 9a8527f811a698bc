// Résumé extraction: document text → nine structured fields.
// Failures never escape this module; they come back as `Extraction::Failed`.

pub mod document;
pub mod fields;
pub mod vocabulary;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use crate::extraction::document::read_document_text;
use crate::extraction::fields::parse_fields;
use crate::models::resume::Extraction;

/// Carried in `AppState` as `Arc<dyn Extractor>`.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Extraction;
}

/// Default extractor: reads PDF/DOCX/text and applies the rule-based field parser.
pub struct DocumentExtractor;

#[async_trait]
impl Extractor for DocumentExtractor {
    async fn extract(&self, path: &Path) -> Extraction {
        let owned: PathBuf = path.to_path_buf();
        // PDF parsing is CPU-bound and may panic on hostile input.
        let outcome = tokio::task::spawn_blocking(move || extract_blocking(&owned)).await;

        let extraction = match outcome {
            Ok(extraction) => extraction,
            Err(join_err) => Extraction::failed(format!("document parser crashed: {join_err}")),
        };

        if let Extraction::Failed { error } = &extraction {
            warn!("Extraction failed for {}: {error}", path.display());
        }
        extraction
    }
}

fn extract_blocking(path: &Path) -> Extraction {
    let text = match read_document_text(path) {
        Ok(text) => text,
        Err(e) => return Extraction::failed(e.to_string()),
    };

    if text.trim().is_empty() {
        debug!("No text found in {}", path.display());
        return Extraction::empty();
    }

    Extraction::Fields(parse_fields(&text, Utc::now().date_naive()))
}

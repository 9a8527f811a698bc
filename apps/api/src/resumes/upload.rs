use std::io;
use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

/// Multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

/// Pulls the `file` field out of the multipart body, draining any others.
pub async fn read_upload(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) && upload.is_none() {
            let file_name = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| AppError::Validation("field 'file' has no file name".to_string()))?;
            let data = field.bytes().await?;
            upload = Some(UploadedFile { file_name, data });
        } else {
            let _ = field.bytes().await?;
        }
    }
    upload.ok_or_else(|| AppError::Validation("field 'file' is required".to_string()))
}

/// Path the upload is written to. Only the final component of the client's
/// name is used; a same-named upload overwrites the earlier file. A name with
/// no final component fails like any other storage error.
pub fn storage_path(upload_dir: &Path, file_name: &str) -> Result<PathBuf, AppError> {
    Path::new(file_name)
        .file_name()
        .map(|name| upload_dir.join(name))
        .ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid file name '{file_name}'"),
            ))
        })
}

/// save file → extract → analyze → persist.
pub async fn process_upload(
    state: &AppState,
    upload: UploadedFile,
) -> Result<ResumeRecord, AppError> {
    let UploadedFile { file_name, data } = upload;

    let path = storage_path(&state.upload_dir, &file_name)?;
    tokio::fs::write(&path, &data).await?;
    debug!("Saved {} bytes to {}", data.len(), path.display());

    let extracted = state.extractor.extract(&path).await;
    let analysis = state.analyzer.analyze(&extracted).await?;
    let id = state.store.save(&file_name, &extracted, &analysis).await?;

    info!(
        "Processed upload {file_name} as resume {id} (extraction_failed={}, analysis_failed={})",
        extracted.is_failure(),
        analysis.is_failure()
    );

    Ok(ResumeRecord {
        id,
        file_name,
        extracted,
        analysis,
    })
}

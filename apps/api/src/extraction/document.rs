//! Turns a saved upload into plain text, dispatching on file extension.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse PDF: {0}")]
    Pdf(String),

    #[error("could not parse DOCX: {0}")]
    Docx(#[from] docx_rs::ReaderError),
}

/// Reads the document at `path` and returns its text content.
pub fn read_document_text(path: &Path) -> Result<String, ExtractError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string())),
        "docx" => read_docx_text(path),
        "txt" | "text" | "md" => Ok(std::fs::read_to_string(path)?),
        "" => Err(ExtractError::UnsupportedFormat("no file extension".to_string())),
        other => Err(ExtractError::UnsupportedFormat(format!(".{other}"))),
    }
}

/// One line per top-level paragraph. Line breaks inside a paragraph become
/// newlines, tabs stay tabs.
fn read_docx_text(path: &Path) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(&std::fs::read(path)?)?;

    let mut text = String::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            push_paragraph_children(&paragraph.children, &mut text);
            text.push('\n');
        }
    }
    Ok(text)
}

fn push_paragraph_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            // hyperlinked e-mail addresses and profile URLs
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, text),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read, Write};

    use docx_rs::{BreakType, Docx, Paragraph, Run};

    use super::*;

    #[test]
    fn test_reads_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.TXT");
        std::fs::write(&path, "Ada Lovelace\nAnalyst").unwrap();
        assert_eq!(read_document_text(&path).unwrap(), "Ada Lovelace\nAnalyst");
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.odt");
        std::fs::write(&path, "whatever").unwrap();
        let err = read_document_text(&path).unwrap_err();
        assert_eq!(err.to_string(), "unsupported file format: .odt");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_document_text(Path::new("/nonexistent/cv.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn test_corrupt_pdf_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();
        assert!(read_document_text(&path).is_err());
    }

    /// Packs `paragraphs` into a real .docx, then applies `patch` to the raw
    /// `word/document.xml` so tests can inject markup the writer never emits.
    fn write_docx(path: &Path, paragraphs: Vec<Paragraph>, patch: impl Fn(String) -> String) {
        let mut packed = Cursor::new(Vec::new());
        paragraphs
            .into_iter()
            .fold(Docx::new(), Docx::add_paragraph)
            .build()
            .pack(&mut packed)
            .unwrap();

        let mut source = zip::ZipArchive::new(Cursor::new(packed.into_inner())).unwrap();
        let mut writer = zip::ZipWriter::new(std::fs::File::create(path).unwrap());
        for i in 0..source.len() {
            let mut entry = source.by_index(i).unwrap();
            let name = entry.name().to_string();
            let mut content = Vec::new();
            entry.read_to_end(&mut content).unwrap();
            if name == "word/document.xml" {
                content = patch(String::from_utf8(content).unwrap()).into_bytes();
            }
            writer
                .start_file(name, zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(&content).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_reads_docx_paragraphs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx");
        write_docx(
            &path,
            vec![
                Paragraph::new().add_run(Run::new().add_text("Alan Turing")),
                Paragraph::new().add_run(
                    Run::new()
                        .add_text("R&D")
                        .add_tab()
                        .add_text("Bletchley"),
                ),
            ],
            |xml| xml,
        );

        assert_eq!(
            read_document_text(&path).unwrap(),
            "Alan Turing\nR&D\tBletchley\n"
        );
    }

    #[test]
    fn test_docx_line_breaks_and_character_references() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx");
        write_docx(
            &path,
            vec![Paragraph::new().add_run(
                Run::new()
                    .add_text("Alan Turing")
                    .add_break(BreakType::TextWrapping)
                    .add_text("Analyst 1939 DASH 1945"),
            )],
            |xml| xml.replace(" DASH ", "&#8211;"),
        );

        let text = read_document_text(&path).unwrap();
        assert_eq!(text, "Alan Turing\nAnalyst 1939\u{2013}1945\n");

        let fields = crate::extraction::fields::parse_fields(
            &text,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert_eq!(fields.name.as_deref(), Some("Alan Turing"));
    }

    #[test]
    fn test_corrupt_docx_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx");
        std::fs::write(&path, b"not a zip container").unwrap();

        assert!(matches!(
            read_document_text(&path).unwrap_err(),
            ExtractError::Docx(_)
        ));
    }
}

//! Plain-text extraction from uploaded documents.
//!
//! Extraction runs in-process. PDF and DOCX parsing are CPU-bound, so
//! callers on the async path should wrap `extract_text` in
//! `tokio::task::spawn_blocking`.

use super::PipelineError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TXT_MIME: &str = "text/plain";

/// Whether the declared media type is one this service can ingest.
pub fn supported_media_type(media_type: &str) -> bool {
    matches!(media_type, PDF_MIME | DOCX_MIME | TXT_MIME)
}

/// Extract plain text from `data` according to its declared media type.
pub fn extract_text(data: &[u8], media_type: &str) -> Result<String, PipelineError> {
    match media_type {
        PDF_MIME => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| PipelineError::Extraction(format!("failed to read PDF: {}", e))),
        DOCX_MIME => extract_docx(data),
        TXT_MIME => Ok(String::from_utf8_lossy(data).into_owned()),
        other => Err(PipelineError::Extraction(format!(
            "unsupported media type: {}",
            other
        ))),
    }
}

/// Concatenate the text runs of every paragraph, one paragraph per line.
fn extract_docx(data: &[u8]) -> Result<String, PipelineError> {
    let docx = docx_rs::read_docx(data)
        .map_err(|e| PipelineError::Extraction(format!("failed to read DOCX: {}", e)))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for para_child in &paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let docx_rs::RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }

    Ok(paragraphs.join("\n"))
}

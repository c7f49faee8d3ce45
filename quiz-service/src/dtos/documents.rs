use serde::Serialize;

/// Response body for a successful upload, returned with `201 Created`.
///
/// `session_id` is the handle for all subsequent generation requests;
/// `text_length` counts characters of the extracted text, not bytes.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub session_id: String,
    pub filename: String,
    pub chunk_count: usize,
    pub text_length: usize,
}

pub mod documents;
pub mod generate;

pub use documents::UploadResponse;
pub use generate::{GenerateRequest, GenerateResponse};

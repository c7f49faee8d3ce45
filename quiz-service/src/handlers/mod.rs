pub mod documents;
pub mod generate;
pub mod health;

pub use documents::upload_document;
pub use generate::generate_content;
pub use health::health_check;

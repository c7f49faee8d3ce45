pub mod content;
pub mod session;

pub use content::{Difficulty, Flashcard, GeneratedItem, Language, Mode, QuizQuestion};
pub use session::DocumentSession;

pub mod domain;
pub mod error;
pub mod generation;

pub use domain::{Flashcard, QuizQuestion, StudyPackage};
pub use error::GenerationError;
pub use generation::{
    CompletionClient, CompletionConfig, MockCompletionClient, OllamaClient, StudyPipeline,
};

mod client;
mod extractor;
mod fallback;
mod normalizer;
mod pipeline;
mod prompt;

pub use client::{
    CompletionClient, CompletionConfig, MockCompletionClient, OllamaClient, DEFAULT_ENDPOINT,
    DEFAULT_MODEL, DEFAULT_TIMEOUT,
};
pub use extractor::{extract_json, Shape};
pub use fallback::{failed_summary, fallback_flashcards, fallback_quiz, insufficient_summary};
pub use normalizer::normalize_quiz;
pub use pipeline::StudyPipeline;
pub use prompt::{
    flashcard_prompt, quiz_prompt, summary_prompt, truncate_content, FLASHCARD_CONTENT_CAP,
    QUIZ_CONTENT_CAP, SUMMARY_CONTENT_CAP,
};

/// First `max` chars of `text`, for logs and error messages.
pub(crate) fn preview(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

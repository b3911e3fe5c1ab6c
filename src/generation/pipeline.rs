use std::sync::Arc;
use tracing::warn;

use crate::domain::{Flashcard, QuizQuestion, StudyPackage};
use crate::error::GenerationError;
use crate::generation::client::CompletionClient;
use crate::generation::extractor::{extract_json, Shape};
use crate::generation::fallback::{
    failed_summary, fallback_flashcards, fallback_quiz, insufficient_summary,
};
use crate::generation::normalizer::normalize_quiz;
use crate::generation::prompt::{
    flashcard_prompt, quiz_prompt, summary_prompt, truncate_content, FLASHCARD_CONTENT_CAP,
    QUIZ_CONTENT_CAP, SUMMARY_CONTENT_CAP,
};

const MIN_SUMMARY_CHARS: usize = 50;

/// Runs the three generators against one completion client. The public
/// methods never fail: each wraps a fallible core and trades any error for
/// the artifact's fixed fallback, logging the cause. Callers always get a
/// well-formed result, at worst filled with placeholder content.
pub struct StudyPipeline<C: CompletionClient> {
    llm: Arc<C>,
}

impl<C: CompletionClient> StudyPipeline<C> {
    pub fn new(llm: Arc<C>) -> Self {
        Self { llm }
    }

    /// Generates all three artifacts sequentially and assembles the
    /// package. Each generator is failure-isolated, so this never fails.
    pub fn process_document(&self, content: &str) -> StudyPackage {
        StudyPackage {
            summary: self.generate_summary(content),
            flash_cards: self.generate_flashcards(content),
            quiz: self.generate_quiz(content),
        }
    }

    pub fn generate_flashcards(&self, content: &str) -> Vec<Flashcard> {
        let content = truncate_content(content, FLASHCARD_CONTENT_CAP);
        match self.flashcards(&content) {
            Ok(deck) => deck,
            Err(error) => {
                warn!(%error, "flashcard generation failed, using fallback deck");
                fallback_flashcards(&content)
            }
        }
    }

    pub fn generate_quiz(&self, content: &str) -> Vec<QuizQuestion> {
        let content = truncate_content(content, QUIZ_CONTENT_CAP);
        match self.quiz(&content) {
            Ok(questions) => questions,
            Err(error) => {
                warn!(%error, "quiz generation failed, using fallback quiz");
                fallback_quiz()
            }
        }
    }

    pub fn generate_summary(&self, content: &str) -> String {
        let content = truncate_content(content, SUMMARY_CONTENT_CAP);
        match self.summary(&content) {
            Ok(summary) => summary,
            Err(error) => {
                warn!(%error, "summary generation failed, using fallback text");
                failed_summary(content.chars().count())
            }
        }
    }

    fn flashcards(&self, content: &str) -> Result<Vec<Flashcard>, GenerationError> {
        let response = self.llm.complete(&flashcard_prompt(content))?;
        let value = extract_json(&response, Shape::Array)?;
        Ok(serde_json::from_value(value)?)
    }

    fn quiz(&self, content: &str) -> Result<Vec<QuizQuestion>, GenerationError> {
        let response = self.llm.complete(&quiz_prompt(content))?;
        let value = extract_json(&response, Shape::Array)?;
        let mut questions: Vec<QuizQuestion> = serde_json::from_value(value)?;
        normalize_quiz(&mut questions);
        Ok(questions)
    }

    fn summary(&self, content: &str) -> Result<String, GenerationError> {
        let summary = self.llm.complete(&summary_prompt(content))?;
        if summary.chars().count() < MIN_SUMMARY_CHARS {
            return Ok(insufficient_summary(content.chars().count()));
        }
        Ok(summary)
    }
}

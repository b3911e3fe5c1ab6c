use serde::{Deserialize, Serialize};

use super::{Flashcard, QuizQuestion};

/// Everything produced from one document: a markdown summary, a flashcard
/// deck and a multiple-choice quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPackage {
    pub summary: String,
    pub flash_cards: Vec<Flashcard>,
    pub quiz: Vec<QuizQuestion>,
}

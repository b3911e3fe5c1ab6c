use serde::{Deserialize, Serialize};

/// One question/answer pair. The wire format is a two-element JSON array
/// (`["Q", "A"]`), which is what the model is asked to emit, so the struct
/// bridges through a tuple on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl From<(String, String)> for Flashcard {
    fn from((question, answer): (String, String)) -> Self {
        Self { question, answer }
    }
}

impl From<Flashcard> for (String, String) {
    fn from(card: Flashcard) -> Self {
        (card.question, card.answer)
    }
}

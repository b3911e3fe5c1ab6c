use serde::{Deserialize, Serialize};

/// A multiple-choice question as the model emits it. `possible_answers` and
/// `index` stay optional because the model omits them often enough that the
/// normalizer has to treat their absence as a first-class case: such items
/// pass through untouched rather than being dropped.
///
/// After normalization of a well-formed item, `possible_answers` holds
/// exactly 4 entries and `possible_answers[index]` is the correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_answers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
}

impl QuizQuestion {
    pub fn new(question: impl Into<String>, possible_answers: Vec<String>, index: i64) -> Self {
        Self {
            question: question.into(),
            possible_answers: Some(possible_answers),
            index: Some(index),
        }
    }
}

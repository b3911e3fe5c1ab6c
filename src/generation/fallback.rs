//! Deterministic substitutes returned when generation or parsing fails.
//! Kept public so the fallback policy can be tested apart from the
//! pipeline that applies it.

use crate::domain::{Flashcard, QuizQuestion};

/// Fixed 10-card deck. The first card carries the opening of the (already
/// truncated) content so a failed run still points at the document.
pub fn fallback_flashcards(content: &str) -> Vec<Flashcard> {
    let excerpt: String = content.chars().take(100).collect();
    let mut deck = vec![Flashcard::new(
        "Main Topic",
        format!("This document discusses: {excerpt}"),
    )];
    for n in 1..=8 {
        deck.push(Flashcard::new(
            format!("Key Point {n}"),
            "See document for details",
        ));
    }
    deck.push(Flashcard::new(
        "Summary",
        "Review the full document for comprehensive understanding",
    ));
    deck
}

const FALLBACK_QUIZ: [(&str, [&str; 4], i64); 10] = [
    (
        "What is the main topic of this document?",
        ["Option A", "Option B", "Option C", "Option D"],
        0,
    ),
    (
        "Question 2 about the content?",
        ["Answer 1", "Answer 2", "Answer 3", "Answer 4"],
        1,
    ),
    (
        "Question 3 about the content?",
        ["Choice A", "Choice B", "Choice C", "Choice D"],
        2,
    ),
    (
        "Question 4 about the content?",
        ["Option 1", "Option 2", "Option 3", "Option 4"],
        3,
    ),
    ("Question 5 about the content?", ["A", "B", "C", "D"], 0),
    (
        "Question 6 about the content?",
        ["First", "Second", "Third", "Fourth"],
        1,
    ),
    (
        "Question 7 about the content?",
        ["Alpha", "Beta", "Gamma", "Delta"],
        2,
    ),
    (
        "Question 8 about the content?",
        ["Red", "Blue", "Green", "Yellow"],
        3,
    ),
    (
        "Question 9 about the content?",
        ["North", "South", "East", "West"],
        0,
    ),
    (
        "Question 10 about the content?",
        ["Spring", "Summer", "Fall", "Winter"],
        1,
    ),
];

/// Fixed 10-question quiz with varied distractor sets and correct indices
/// spanning 0-3.
pub fn fallback_quiz() -> Vec<QuizQuestion> {
    FALLBACK_QUIZ
        .iter()
        .map(|(question, answers, index)| {
            QuizQuestion::new(
                *question,
                answers.iter().map(|a| a.to_string()).collect(),
                *index,
            )
        })
        .collect()
}

/// Substitute for a model summary that came back empty or too short to be
/// useful. `content_len` is the truncated working copy's char count.
pub fn insufficient_summary(content_len: usize) -> String {
    format!(
        "## Overview\n\n\
         This document contains {content_len} characters of content.\n\n\
         **Main Points:**\n\
         - Content processing completed\n\
         - Document uploaded successfully\n\
         - Summary generated from source material"
    )
}

/// Substitute when summary generation failed outright.
pub fn failed_summary(content_len: usize) -> String {
    format!(
        "## Overview\n\n\
         Document uploaded successfully.\n\n\
         **Content Length:** {content_len} characters\n\n\
         **Note:** Unable to generate detailed summary. Please try again."
    )
}

/// Content caps are in chars, not bytes; truncation must never split a
/// UTF-8 sequence. The summary gets more room because its output is prose
/// rather than JSON the model has to keep well-formed.
pub const FLASHCARD_CONTENT_CAP: usize = 3000;
pub const QUIZ_CONTENT_CAP: usize = 3000;
pub const SUMMARY_CONTENT_CAP: usize = 4000;

/// Returns a working copy capped at `cap` chars, with `...` appended when
/// anything was cut. The caller's original content is never modified.
pub fn truncate_content(content: &str, cap: usize) -> String {
    if content.chars().count() > cap {
        let mut truncated: String = content.chars().take(cap).collect();
        truncated.push_str("...");
        truncated
    } else {
        content.to_string()
    }
}

/// Each prompt embeds the (already truncated) content, an explicit format
/// example, and ends with a cue token so the model starts emitting the
/// artifact instead of more prose.
pub fn flashcard_prompt(content: &str) -> String {
    format!(
        concat!(
            "Create exactly 10 flashcards from this content. ",
            "Return ONLY valid JSON as a list of lists. Each inner list has [question, answer]. ",
            "Example format: [[\"Q1\", \"A1\"], [\"Q2\", \"A2\"]]\n\n",
            "Content:\n{}\n\nJSON:"
        ),
        content
    )
}

pub fn quiz_prompt(content: &str) -> String {
    format!(
        concat!(
            "Create exactly 10 quiz questions from this content. ",
            "Return ONLY valid JSON as a list of objects. Each object must have: ",
            "question (string), possible_answers (array of 4 strings), index (number 0-3 for correct answer). ",
            "Example: [{{\"question\": \"Q1?\", \"possible_answers\": [\"A\", \"B\", \"C\", \"D\"], \"index\": 0}}]\n\n",
            "Content:\n{}\n\nJSON:"
        ),
        content
    )
}

pub fn summary_prompt(content: &str) -> String {
    format!(
        concat!(
            "Summarize this content in markdown format. Use bold for main points (**text**) ",
            "and bullet points for details. Start with ## Overview. Be detailed.\n\n",
            "Content:\n{}\n\nSummary:"
        ),
        content
    )
}

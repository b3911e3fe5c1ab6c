use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::GenerationError;
use crate::generation::preview;

static FENCE_JSON: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\s*").unwrap());
static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\s*").unwrap());
static NESTED_ARRAYS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[\[.*?\]\]").unwrap());
static OBJECT_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[\{.*?\}\]").unwrap());
static OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*?\}").unwrap());

/// Top-level JSON structure the extractor should hunt for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Object,
}

/// Recovers a JSON value from model output that usually wraps it in prose
/// or code fences. Best-effort by construction: fence markers are stripped,
/// shape-specific patterns are tried in order, and the whole trimmed text is
/// parsed as a last resort. The pattern order and the patterns-then-whole-
/// text fallback are deliberate; changing either changes what gets matched
/// on truncated or malformed model output.
pub fn extract_json(text: &str, shape: Shape) -> Result<Value, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let stripped = FENCE_JSON.replace_all(text, "");
    let stripped = FENCE.replace_all(&stripped, "");

    let patterns: Vec<&Regex> = match shape {
        Shape::Array => vec![&*NESTED_ARRAYS, &*OBJECT_ARRAY],
        Shape::Object => vec![&*OBJECT],
    };

    for pattern in patterns {
        if let Some(candidate) = pattern.find(&stripped) {
            if let Ok(value) = serde_json::from_str(candidate.as_str()) {
                return Ok(value);
            }
        }
    }

    if let Ok(value) = serde_json::from_str(stripped.trim()) {
        return Ok(value);
    }

    Err(GenerationError::JsonExtraction {
        preview: preview(&stripped, 500),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recovers_fenced_nested_array() {
        let text = "Here is the data:\n```json\n[[\"Q\",\"A\"]]\n```";
        let value = extract_json(text, Shape::Array).unwrap();
        assert_eq!(value, json!([["Q", "A"]]));
    }

    #[test]
    fn recovers_array_of_objects_across_newlines() {
        let text = "Sure! The quiz:\n[{\"question\": \"Q?\",\n  \"index\": 0}]\nHope it helps.";
        let value = extract_json(text, Shape::Array).unwrap();
        assert_eq!(value, json!([{"question": "Q?", "index": 0}]));
    }

    #[test]
    fn recovers_object_wrapped_in_prose() {
        let text = "The result is {\"a\": 1} as requested.";
        let value = extract_json(text, Shape::Object).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn bare_fences_are_stripped() {
        let value = extract_json("```\n{\"a\": [1, 2]}\n```", Shape::Object).unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
    }

    #[test]
    fn falls_back_to_whole_text_parse() {
        // No nested-array or object-array pattern matches a flat array,
        // so only the whole-text attempt can succeed.
        let value = extract_json("[1, 2, 3]", Shape::Array).unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            extract_json("", Shape::Array),
            Err(GenerationError::EmptyResponse)
        ));
        assert!(matches!(
            extract_json("  \n\t ", Shape::Object),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn junk_reports_extraction_failure_with_preview() {
        let text = "x".repeat(600);
        match extract_json(&text, Shape::Array) {
            Err(GenerationError::JsonExtraction { preview }) => {
                assert_eq!(preview.chars().count(), 500);
            }
            other => panic!("expected JsonExtraction, got {other:?}"),
        }
    }

    #[test]
    fn broken_candidate_falls_through_to_next_pattern() {
        // The [[..]] span is invalid JSON; the [{..}] span parses.
        let text = "[[not json]] and [{\"ok\": true}]";
        let value = extract_json(text, Shape::Array).unwrap();
        assert_eq!(value, json!([{"ok": true}]));
    }
}

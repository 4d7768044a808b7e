//! Quiz output extraction
//!
//! The model is asked for JSON but frequently wraps it in prose or code
//! fences. The extractor locates the first complete JSON object span in the
//! raw text with a balance-aware scan (string- and escape-aware, so braces
//! inside question text do not terminate the span early) and then parses it
//! strictly.

use crate::error::ApiError;
use serde_json::Value;

/// Locate the first complete `{...}` span in `text`.
///
/// Scans from the first `{` and tracks brace depth, skipping brace and quote
/// characters that occur inside JSON strings. Returns `None` when there is no
/// opening brace or the braces never balance.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Extract and validate the quiz object from raw model output.
///
/// The parsed object is returned verbatim; only the presence of a top-level
/// `questions` array is checked, the per-question shape is trusted to the
/// prompt.
pub fn parse_quiz(text: &str) -> Result<Value, ApiError> {
    let span = extract_json_span(text)
        .ok_or_else(|| ApiError::Parse("Failed to parse quiz output.".into()))?;

    let data: Value = serde_json::from_str(span)
        .map_err(|_| ApiError::Parse("Failed to parse quiz output.".into()))?;

    match data.get("questions") {
        Some(Value::Array(_)) => Ok(data),
        _ => Err(ApiError::Schema("Quiz format invalid.".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_bare_object() {
        let text = r#"{"questions": []}"#;
        assert_eq!(extract_json_span(text), Some(text));
    }

    #[test]
    fn test_extract_with_leading_prose() {
        let text = "Sure! Here is your quiz:\n{\"questions\": []}";
        assert_eq!(extract_json_span(text), Some("{\"questions\": []}"));
    }

    #[test]
    fn test_extract_with_trailing_prose() {
        let text = "{\"questions\": []}\nLet me know if you need more.";
        assert_eq!(extract_json_span(text), Some("{\"questions\": []}"));
    }

    #[test]
    fn test_extract_trailing_prose_with_stray_brace() {
        // A greedy first-{-to-last-} match would swallow the stray brace.
        let text = "{\"questions\": []} and remember: use {braces} carefully";
        assert_eq!(extract_json_span(text), Some("{\"questions\": []}"));
    }

    #[test]
    fn test_extract_nested_objects() {
        let text = r#"{"questions": [{"question": "Q1", "options": []}]}"#;
        assert_eq!(extract_json_span(text), Some(text));
    }

    #[test]
    fn test_extract_brace_inside_string() {
        let text = r#"{"questions": [{"question": "What does {} mean?"}]}"#;
        assert_eq!(extract_json_span(text), Some(text));
    }

    #[test]
    fn test_extract_escaped_quote_inside_string() {
        let text = r#"{"question": "He said \"}\" loudly"}"#;
        assert_eq!(extract_json_span(text), Some(text));
    }

    #[test]
    fn test_extract_no_braces() {
        assert_eq!(extract_json_span("no json here"), None);
    }

    #[test]
    fn test_extract_unbalanced() {
        assert_eq!(extract_json_span("{\"questions\": ["), None);
    }

    #[test]
    fn test_parse_quiz_inside_code_fence() {
        let text = "```json\n{\"questions\": [{\"question\": \"Q\"}]}\n```";
        let data = parse_quiz(text).unwrap();
        assert_eq!(data["questions"][0]["question"], json!("Q"));
    }

    #[test]
    fn test_parse_quiz_returns_object_verbatim() {
        let text = r#"{"questions": [], "extra": 42}"#;
        let data = parse_quiz(text).unwrap();
        assert_eq!(data["extra"], json!(42));
    }

    #[test]
    fn test_parse_quiz_no_span_is_parse_error() {
        let err = parse_quiz("the model refused").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert_eq!(err.to_string(), "Failed to parse quiz output.");
    }

    #[test]
    fn test_parse_quiz_invalid_json_is_parse_error() {
        let err = parse_quiz("{not json}").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_parse_quiz_missing_questions_is_schema_error() {
        let err = parse_quiz(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, ApiError::Schema(_)));
        assert_eq!(err.to_string(), "Quiz format invalid.");
    }

    #[test]
    fn test_parse_quiz_questions_not_array_is_schema_error() {
        let err = parse_quiz(r#"{"questions": "none"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Schema(_)));
    }
}

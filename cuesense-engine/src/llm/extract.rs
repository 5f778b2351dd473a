//! JSON extraction from free-form model output.
//!
//! Judges ask for "a single JSON object" but models wrap answers in
//! prose, code fences or stray text. The scanner finds the first
//! balanced object that actually parses.

use serde_json::Value;

/// First parseable JSON object in the text, if any
pub fn first_json_object(text: &str) -> Option<Value> {
    let starts: Vec<usize> = text
        .char_indices()
        .filter(|&(_, c)| c == '{')
        .map(|(i, _)| i)
        .collect();

    for start in starts {
        if let Some(len) = balanced_object_len(&text[start..]) {
            if let Ok(value) = serde_json::from_str::<Value>(&text[start..start + len]) {
                if value.is_object() {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Byte length of the balanced `{...}` starting at the slice head.
/// Tracks string state so braces inside strings do not count.
fn balanced_object_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_object() {
        let value = first_json_object(r#"{"primary": "欢快", "intensity": 7}"#).unwrap();
        assert_eq!(value["primary"], "欢快");
        assert_eq!(value["intensity"], 7);
    }

    #[test]
    fn test_object_wrapped_in_prose_and_fence() {
        let text = "Sure! Here is the analysis:\n```json\n{\"scene\": \"战斗\", \"confidence\": 88}\n```\nHope that helps.";
        let value = first_json_object(text).unwrap();
        assert_eq!(value["scene"], "战斗");
    }

    #[test]
    fn test_nested_objects() {
        let text = r#"result: {"dimensions": {"happiness": 8, "sadness": 1}, "primary": "快乐"}"#;
        let value = first_json_object(text).unwrap();
        assert_eq!(value["dimensions"]["happiness"], 8);
    }

    #[test]
    fn test_braces_inside_strings_ignored() {
        let text = r#"{"reasoning": "tempo {fast} and {driving}", "confidence": 90}"#;
        let value = first_json_object(text).unwrap();
        assert_eq!(value["confidence"], 90);
    }

    #[test]
    fn test_skips_unparseable_candidate() {
        let text = r#"{not json at all} then {"a": 1}"#;
        let value = first_json_object(text).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_no_object_returns_none() {
        assert!(first_json_object("no structured data here").is_none());
        assert!(first_json_object("unclosed { \"a\": 1").is_none());
    }
}

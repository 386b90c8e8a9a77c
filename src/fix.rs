//! Delimiter-based parsing of model output into a structured fix suggestion.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;

/// Marker the prompt instructs the model to place between the corrected code
/// and its explanation ("explanation of the fix:").
pub const DELIMITER: &str = "修正内容の説明:";

/// Lead-in phrases some models prepend despite the prompt. Removed as exact
/// substrings before splitting.
const PREAMBLES: &[&str] = &["Here is the corrected code snippet:", "Corrected code:"];

/// Parsed fix suggestion. Valid for one request/response cycle only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FixResult {
    pub fixed_code: String,
    pub explanation: String,
    pub has_fix: bool,
    /// Newline-joined `"Line N: content"` entries, one per changed line.
    pub changed_lines: String,
}

/// Split `model_output` on [`DELIMITER`] into corrected code and explanation,
/// then diff the code against `original` line by line.
///
/// Fails with `Malformed` when the output is empty, the delimiter is absent,
/// or either side of it is empty.
pub fn parse_fix(original: &str, model_output: &str) -> Result<FixResult, Error> {
    if model_output.trim().is_empty() {
        return Err(Error::Malformed("empty response".to_string()));
    }

    let mut cleaned = model_output.to_string();
    for phrase in PREAMBLES {
        cleaned = cleaned.replace(phrase, "");
    }
    let cleaned = cleaned.trim();

    // Text after a second delimiter occurrence is dropped with the remainder.
    let mut parts = cleaned.splitn(3, DELIMITER);
    let code_part = parts.next().unwrap_or("");
    let explanation_part = parts
        .next()
        .ok_or_else(|| Error::Malformed(format!("delimiter {DELIMITER:?} not found")))?;

    if code_part.is_empty() || explanation_part.is_empty() {
        return Err(Error::Malformed("empty code or explanation section".to_string()));
    }

    let fixed_code = strip_fences(code_part).trim().to_string();
    let explanation = explanation_part.trim().to_string();

    let changed_lines = changed_lines(original, &fixed_code);
    let has_fix = !changed_lines.is_empty();
    debug!(has_fix, "parsed fix suggestion");

    Ok(FixResult { fixed_code, explanation, has_fix, changed_lines })
}

/// Remove every ``` fence marker together with an attached language tag.
/// Idempotent: the output contains no fence sequences.
fn strip_fences(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(idx) = rest.find("```") {
        out.push_str(&rest[..idx]);
        rest = &rest[idx + 3..];
        let tag_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'+' | b'-'))
            .count();
        rest = &rest[tag_len..];
    }
    out.push_str(rest);
    out
}

/// Positional line diff. Compares index by index over the ORIGINAL's range;
/// a missing fixed line compares as empty. An inserted or deleted line shifts
/// every later line into the diff, and fixed lines past the original's length
/// are never reported.
fn changed_lines(original: &str, fixed: &str) -> String {
    let fixed_lines: Vec<&str> = fixed.split('\n').collect();
    original
        .split('\n')
        .enumerate()
        .filter_map(|(i, line)| {
            let fixed_line = fixed_lines.get(i).copied().unwrap_or("");
            (line != fixed_line).then(|| format!("Line {}: {}", i + 1, fixed_line))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_code_and_explanation() {
        let original = "a\nb\nc";
        let output = "```python\na\nX\nc\n```\n修正内容の説明:\n説明文";
        let result = parse_fix(original, output).unwrap();
        assert_eq!(result.fixed_code, "a\nX\nc");
        assert_eq!(result.explanation, "説明文");
        assert_eq!(result.changed_lines, "Line 2: X");
        assert!(result.has_fix);
    }

    #[test]
    fn identical_code_has_no_fix() {
        let output = "```python\na\nb\n```\n修正内容の説明:\n問題ありません";
        let result = parse_fix("a\nb", output).unwrap();
        assert_eq!(result.changed_lines, "");
        assert!(!result.has_fix);
    }

    #[test]
    fn missing_delimiter_is_malformed() {
        let err = parse_fix("a", "```python\na\n```").unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn empty_output_is_malformed() {
        assert!(matches!(parse_fix("a", "  \n"), Err(Error::Malformed(_))));
    }

    #[test]
    fn empty_explanation_side_is_malformed() {
        let err = parse_fix("a", "```python\na\n```\n修正内容の説明:").unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn preamble_phrases_are_removed() {
        let output = "Here is the corrected code snippet:\n```python\nX\n```\n修正内容の説明:\n直した";
        let result = parse_fix("a", output).unwrap();
        assert_eq!(result.fixed_code, "X");
        assert_eq!(result.changed_lines, "Line 1: X");
    }

    #[test]
    fn shorter_fixed_code_reports_trailing_lines_as_empty() {
        let output = "```python\na\n```\n修正内容の説明:\n削った";
        let result = parse_fix("a\nb\nc", output).unwrap();
        assert_eq!(result.changed_lines, "Line 2: \nLine 3: ");
        assert!(result.has_fix);
    }

    #[test]
    fn extra_fixed_lines_beyond_original_are_not_reported() {
        let output = "```python\na\nb\nextra\n```\n修正内容の説明:\n足した";
        let result = parse_fix("a\nb", output).unwrap();
        assert_eq!(result.changed_lines, "");
        assert!(!result.has_fix);
    }

    #[test]
    fn fence_stripping_is_idempotent() {
        let once = strip_fences("```rust\nfn main() {}\n```");
        let twice = strip_fences(&once);
        assert_eq!(once, twice);
        assert_eq!(once.trim(), "fn main() {}");
    }

    #[test]
    fn fence_language_tag_is_consumed() {
        assert_eq!(strip_fences("```python\nx = 1\n```").trim(), "x = 1");
        assert_eq!(strip_fences("```c++\nint x;\n```").trim(), "int x;");
    }
}

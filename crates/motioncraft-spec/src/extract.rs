//! JSON object extraction from raw model output.
//!
//! Upstream responses are free text that may wrap the spec object in
//! commentary, markdown fences, or reasoning. This module finds the first
//! balanced `{...}` span so the rest of the blob can be ignored. Brace
//! balancing is not a regular language, so this is a hand-rolled scanner
//! rather than a regex.

/// Returns the first balanced `{...}` span in `text`, if any.
///
/// The scanner tracks brace depth while honoring JSON string literals and
/// backslash escapes, so braces inside strings do not affect the balance.
/// An opening brace that never closes yields `None`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
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

// src/normalize.rs

/// Normalizes submitted source into what the interpreter expects on disk.
///
/// Literal `\n` sequences (left behind by callers that double-escape JSON)
/// become real newlines, carriage returns are dropped, and the whole text is
/// trimmed. A program that really contains the two characters `\n` is
/// rewritten as well.
pub fn clean_code(code: &str) -> String {
    code.replace("\\n", "\n").replace('\r', "").trim().to_string()
}

/// Outer-trim equality between produced and expected output.
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    actual.trim() == expected.trim()
}

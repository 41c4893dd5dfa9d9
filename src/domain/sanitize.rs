//! Folder name sanitization
//!
//! Derives a filesystem-safe directory name from a free-text entity name
//! (e.g. `"My Fund II"` → `"my-fund-ii"`).

/// Convert free text into a filesystem-safe folder name.
///
/// Lowercases and trims the input, replaces every non-alphanumeric character
/// (Unicode-aware) with a hyphen, collapses hyphen runs, and strips leading
/// and trailing hyphens. Empty or all-punctuation input yields the empty
/// string, which callers must treat as "no usable name".
pub fn sanitize_name(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.trim().to_lowercase().chars() {
        if c.is_alphanumeric() {
            result.push(c);
            pending_hyphen = false;
        } else if !pending_hyphen {
            result.push('-');
            pending_hyphen = true;
        }
    }

    result.trim_matches('-').to_string()
}

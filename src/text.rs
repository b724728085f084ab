/// Byte offset of the first occurrence of `pattern` in `input`.
pub fn find_pattern(input: &str, pattern: &str) -> Option<usize> {
    input.find(pattern)
}

/// Human-readable search outcome for the demo's string section.
pub fn search_message(input: &str, pattern: &str) -> String {
    match find_pattern(input, pattern) {
        Some(position) => format!("Pattern found at position {position}"),
        None => "Pattern not found".to_string(),
    }
}

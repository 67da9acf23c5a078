/// Marker appended to text cut short by [`truncate_with_ellipsis`]
pub const ELLIPSIS: &str = "...";

/// Keep at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Keep at most `max_chars` characters, appending [`ELLIPSIS`] when anything was dropped
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let truncated = truncate_chars(text, max_chars);
    if truncated.len() < text.len() {
        format!("{}{}", truncated, ELLIPSIS)
    } else {
        text.to_string()
    }
}

/// Collapse every run of whitespace (including newlines) into a single space
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_text_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("👋🌍🎉", 2), "👋🌍");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("abcdef", 3), "abc...");
        assert_eq!(truncate_with_ellipsis("abc", 3), "abc");
        assert_eq!(truncate_with_ellipsis(&"a".repeat(150), 100), format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("  fix\nthe   build\t\r\nplease "), "fix the build please");
        assert_eq!(single_line(""), "");
    }
}

// Output formatting — terminal rendering of keyword lists.

pub mod terminal;

/// Shorten `text` to `max_chars` characters, appending "..." when cut.
///
/// Counts characters, not bytes, so French text with accents never splits
/// inside a multi-byte character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_chars("débat", 5), "débat");
    }

    #[test]
    fn test_truncate_respects_accents() {
        assert_eq!(truncate_chars("économique", 3), "éco...");
    }
}

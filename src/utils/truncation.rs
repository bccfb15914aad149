const MAX_ERROR_LENGTH: usize = 512;

/// Shorten a server response or error text for inclusion in a diagnostic.
pub fn truncate_error(error: &str) -> String {
    match error.char_indices().nth(MAX_ERROR_LENGTH) {
        Some((cut, _)) => format!("{}...", &error[..cut]),
        None => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_error("<html>502 Bad Gateway</html>"), "<html>502 Bad Gateway</html>");
    }

    #[test]
    fn test_long_text_truncated() {
        let long = "x".repeat(MAX_ERROR_LENGTH + 100);
        let truncated = truncate_error(&long);
        assert_eq!(truncated.len(), MAX_ERROR_LENGTH + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_multibyte_boundary() {
        let long = "é".repeat(MAX_ERROR_LENGTH + 1);
        let truncated = truncate_error(&long);
        assert_eq!(truncated.chars().count(), MAX_ERROR_LENGTH + 3);
    }
}

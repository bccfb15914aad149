/// Split a comma separated tag list. Empty input yields no tags; segments are
/// kept verbatim.
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_empty() {
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_parse_tags_multiple() {
        assert_eq!(parse_tags("web,external"), vec!["web", "external"]);
    }

    #[test]
    fn test_parse_tags_single() {
        assert_eq!(parse_tags("dmz"), vec!["dmz"]);
    }
}

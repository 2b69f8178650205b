/// Extract the bare address from `addr`, `Name <addr>` or `addr (Comment)`.
///
/// The result is trimmed and lower-cased. Returns `None` when nothing is left.
pub fn parse_address(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    let addr = if let Some(open) = trimmed.rfind('<')
        && let Some(len) = trimmed[open + 1..].find('>')
    {
        &trimmed[open + 1..open + 1 + len]
    } else if let Some(open) = trimmed.find('(')
        && trimmed.ends_with(')')
    {
        &trimmed[..open]
    } else {
        trimmed
    };

    let addr = addr.trim().trim_matches('"').trim();
    if addr.is_empty() {
        None
    } else {
        Some(addr.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_address() {
        assert_eq!(parse_address("a@b.com"), Some("a@b.com".to_string()));
    }

    #[test]
    fn test_display_name_address() {
        assert_eq!(parse_address("Name <a@b.com>"), Some("a@b.com".to_string()));
        assert_eq!(
            parse_address("\"Joe User\" <joe@example.org>"),
            Some("joe@example.org".to_string())
        );
    }

    #[test]
    fn test_both_forms_agree() {
        assert_eq!(parse_address("a@b.com"), parse_address("Name <a@b.com>"));
    }

    #[test]
    fn test_comment_form() {
        assert_eq!(
            parse_address("joe@example.org (Joe User)"),
            Some("joe@example.org".to_string())
        );
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(
            parse_address("  Joe@Example.ORG \r"),
            Some("joe@example.org".to_string())
        );
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_address("   "), None);
        assert_eq!(parse_address("Nobody <>"), None);
    }
}

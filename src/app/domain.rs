//! Input line handling.

/// Extracts the domain from one input line.
///
/// Surrounding whitespace is trimmed. Blank lines and `#` comments yield
/// `None`; anything else is passed through untouched, so a malformed name
/// fails in the lookup and is reported there.
pub fn parse_domain_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed)
}

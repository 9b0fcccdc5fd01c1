use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BunderError, BunderResult};

fn uri_reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]|%[0-9A-Fa-f]{2}|[^\x00-\x7F])+$")
            .expect("invalid URI reference regex")
    })
}

/// Check that a value is a well-formed relative or absolute URI reference.
///
/// Non-ASCII characters are accepted so that internationalised paths pass, everything else
/// must be drawn from the RFC 3986 reserved and unreserved sets or be a percent escape.
pub fn validate_url_reference(path: &str) -> BunderResult<()> {
    if uri_reference_pattern().is_match(path) && path.matches('#').count() <= 1 {
        return Ok(());
    }

    Err(BunderError::invalid_path(path, describe_url_problem(path)))
}

/// Check that a value contains no characters that are illegal in file names.
pub fn validate_file_system_path(path: &str) -> BunderResult<()> {
    match path
        .chars()
        .find(|c| c.is_control() || matches!(c, '<' | '>' | '"' | '|' | '?' | '*'))
    {
        Some(c) => Err(BunderError::invalid_path(
            path,
            format!("contains character {c:?} which is not allowed in a file path"),
        )),
        None => Ok(()),
    }
}

fn describe_url_problem(path: &str) -> String {
    if path.contains('\\') {
        return "contains a backslash, which is not a URL separator".into();
    }
    if path.chars().any(char::is_whitespace) {
        return "contains whitespace".into();
    }
    if path.matches('#').count() > 1 {
        return "contains more than one fragment marker".into();
    }

    let mut chars = path.char_indices();
    while let Some((index, c)) = chars.next() {
        if c == '%' {
            let escape = path.get(index + 1..index + 3).unwrap_or("");
            if escape.len() != 2 || !escape.chars().all(|c| c.is_ascii_hexdigit()) {
                return format!("malformed percent escape at offset {index}");
            }
            chars.next();
            chars.next();
        } else if c.is_ascii() && !is_uri_char(c) {
            return format!("contains character {c:?} which is not allowed in a URL");
        }
    }

    "is not a valid URI reference".into()
}

fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_references() {
        for path in [
            "/valid/path.jpg",
            "valid-file.js",
            "/valid/path/",
            "/valid/path",
            "https://cdn.example.com/site.js?v=1",
            "/img/caf%C3%A9.png",
            "/img/café.png",
        ] {
            assert!(validate_url_reference(path).is_ok(), "{path} should be accepted");
        }
    }

    #[test]
    fn rejects_reserved_garbage() {
        let err = validate_url_reference("<>@#$@$^@#$%").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Format);
    }

    #[test]
    fn rejects_windows_paths() {
        let err = validate_url_reference(r"\some\windows\path.txt").unwrap_err();
        assert!(err.to_string().contains("backslash"));
    }

    #[test]
    fn rejects_bad_percent_escapes() {
        let err = validate_url_reference("/img/100%.png").unwrap_err();
        assert!(err.to_string().contains("percent escape"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(validate_url_reference("/my file.js").is_err());
    }

    #[test]
    fn file_system_paths_reject_illegal_characters() {
        assert!(validate_file_system_path(r"C:\bundles\site.min.js").is_ok());
        assert!(validate_file_system_path("/out/what?.js").is_err());
    }
}

#![forbid(unsafe_code)]

//! String normalization for storage and display.
//!
//! Sanitizers never fail and never validate: they only reshape input.
//! Run them before persisting a value, independently of validation.

/// Strip NUL characters, trim surrounding whitespace, and truncate to
/// `max_len` characters when given.
///
/// Truncation happens after trimming, so a cut can leave trailing whitespace
/// (`"very long string"` at 5 is `"very "`).
#[must_use]
pub fn sanitize_string(value: &str, max_len: Option<usize>) -> String {
    if value.is_empty() {
        return String::new();
    }

    let stripped: String = value.chars().filter(|&c| c != '\0').collect();
    let trimmed = stripped.trim();

    match max_len {
        Some(max) if trimmed.chars().count() > max => {
            crate::trace!(max_len = max, "truncating sanitized string");
            trimmed.chars().take(max).collect()
        }
        _ => trimmed.to_string(),
    }
}

/// Trim and lower-case an email address.
#[must_use]
pub fn sanitize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Collapse whitespace runs and title-case each word.
///
/// `"  john   o'NEIL "` becomes `"John O'neil"`.
#[must_use]
pub fn sanitize_name(value: &str) -> String {
    value
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-case the first character and lower-case the rest.
///
/// A first character whose upper case is more than one character (`ß` is
/// `SS`) is kept as is; expanding it would change the word's shape on every
/// pass.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => out.push(single),
        _ => out.push(first),
    }
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_trims_whitespace() {
        assert_eq!(sanitize_string("  hello world  ", None), "hello world");
    }

    #[test]
    fn string_removes_nul() {
        assert_eq!(sanitize_string("hello\0world", None), "helloworld");
        assert_eq!(sanitize_string("\0  padded \0", None), "padded");
    }

    #[test]
    fn string_truncates() {
        assert_eq!(sanitize_string("very long string", Some(5)), "very ");
        assert_eq!(sanitize_string("short", Some(10)), "short");
        assert_eq!(sanitize_string("abc", Some(0)), "");
    }

    #[test]
    fn string_truncates_by_character() {
        assert_eq!(sanitize_string("café au lait", Some(4)), "café");
    }

    #[test]
    fn string_empty() {
        assert_eq!(sanitize_string("", Some(3)), "");
        assert_eq!(sanitize_string("   ", None), "");
    }

    #[test]
    fn email_lowercases_and_trims() {
        assert_eq!(sanitize_email("  TEST@EXAMPLE.COM  "), "test@example.com");
        assert_eq!(sanitize_email(""), "");
    }

    #[test]
    fn name_capitalizes() {
        assert_eq!(sanitize_name("john   doe"), "John Doe");
        assert_eq!(sanitize_name("  MARY-JANE  watson "), "Mary-jane Watson");
        assert_eq!(sanitize_name("\tann\nlee"), "Ann Lee");
    }

    #[test]
    fn name_keeps_expanding_first_letter() {
        let once = sanitize_name("ßtraße");
        assert_eq!(once, "ßtraße");
        assert_eq!(sanitize_name(&once), once);
        assert_eq!(sanitize_name("élodie ÇELIK"), "Élodie Çelik");
    }

    #[test]
    fn name_empty() {
        assert_eq!(sanitize_name(""), "");
        assert_eq!(sanitize_name("    "), "");
    }
}

//! South African phone number validation and normalization.
//!
//! Shared by the public subscribe form (client-side validation) and the
//! server-side subscribe and bulk import paths. All functions are pure and
//! side-effect free; the canonical representation is `+27XXXXXXXXX`.

/// Strips formatting characters (spaces, dashes, parentheses, dots) that
/// people commonly type into phone fields.
fn strip_formatting(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect()
}

/// Checks whether a raw string is a recognized South African phone number.
///
/// Accepted forms (after stripping formatting characters):
/// - `0XXXXXXXXX` - national format, 10 digits
/// - `27XXXXXXXXX` - country code without plus, 11 digits
/// - `+27XXXXXXXXX` - international format
///
/// The nine significant digits may not start with `0`.
///
/// # Arguments
/// - `raw` - User-entered phone string
///
/// # Returns
/// - `true` - The string matches one of the accepted formats
/// - `false` - Malformed, wrong length, or wrong prefix
pub fn is_valid_sa_phone_number(raw: &str) -> bool {
    normalize_phone_number(raw).is_some()
}

/// Normalizes an accepted phone format to canonical `+27XXXXXXXXX` form.
///
/// Performs straightforward prefix rewriting only; no carrier lookups or
/// ambiguity resolution.
///
/// # Arguments
/// - `raw` - User-entered phone string
///
/// # Returns
/// - `Some(String)` - Canonical international representation
/// - `None` - Input does not match any accepted format
pub fn normalize_phone_number(raw: &str) -> Option<String> {
    let stripped = strip_formatting(raw.trim());

    let significant = if let Some(rest) = stripped.strip_prefix("+27") {
        rest
    } else if let Some(rest) = stripped.strip_prefix("27") {
        rest
    } else if let Some(rest) = stripped.strip_prefix('0') {
        rest
    } else {
        return None;
    };

    if significant.len() != 9 {
        return None;
    }

    if !significant.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    // A leading zero here would mean "00..." or "+270...", neither of which
    // is a dialable subscriber number.
    if significant.starts_with('0') {
        return None;
    }

    Some(format!("+27{significant}"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_national_format() {
        assert_eq!(
            normalize_phone_number("0821234567"),
            Some("+27821234567".to_string())
        );
    }

    #[test]
    fn accepts_international_format() {
        assert_eq!(
            normalize_phone_number("+27821234567"),
            Some("+27821234567".to_string())
        );
    }

    #[test]
    fn accepts_country_code_without_plus() {
        assert_eq!(
            normalize_phone_number("27821234567"),
            Some("+27821234567".to_string())
        );
    }

    #[test]
    fn strips_common_formatting() {
        assert_eq!(
            normalize_phone_number("082 123-4567"),
            Some("+27821234567".to_string())
        );
        assert_eq!(
            normalize_phone_number("(082) 123.4567"),
            Some("+27821234567".to_string())
        );
        assert_eq!(
            normalize_phone_number("  +27 82 123 4567  "),
            Some("+27821234567".to_string())
        );
    }

    #[test]
    fn rejects_empty_string() {
        assert!(!is_valid_sa_phone_number(""));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_sa_phone_number("082123456"));
        assert!(!is_valid_sa_phone_number("08212345678"));
        assert!(!is_valid_sa_phone_number("+2782123456"));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(!is_valid_sa_phone_number("08212345ab"));
        assert!(!is_valid_sa_phone_number("phone"));
    }

    #[test]
    fn rejects_unknown_prefix() {
        assert!(!is_valid_sa_phone_number("+44821234567"));
        assert!(!is_valid_sa_phone_number("1821234567"));
    }

    #[test]
    fn rejects_zero_after_prefix() {
        assert!(!is_valid_sa_phone_number("0021234567"));
        assert!(!is_valid_sa_phone_number("+27021234567"));
    }
}

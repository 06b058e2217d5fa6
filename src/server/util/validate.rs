//! Pure format validators used by the service layer.
//!
//! Services collect the messages for every violated rule and surface them
//! together as a single 400 response, so these helpers only answer yes/no.

use std::sync::LazyLock;

use regex::Regex;

/// `(XX) XXXXX-XXXX` / `(XX) XXXX-XXXX`; parentheses and separators optional.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?\d{2}\)?[\s-]?\d{4,5}[\s-]?\d{4}$").expect("phone pattern is valid")
});

/// `XXXXX-XXX`; dash optional.
static ZIP_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-?\d{3}$").expect("zip code pattern is valid"));

/// Returns true when the value is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates a phone number in the form `(XX) XXXXX-XXXX` or `(XX) XXXX-XXXX`.
///
/// Parentheses and the whitespace/dash separators are optional, so plain
/// digit strings of 10 or 11 digits are accepted as well.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Validates a zip code in the form `XXXXX-XXX` (dash optional).
pub fn is_valid_zip_code(value: &str) -> bool {
    ZIP_CODE_PATTERN.is_match(value)
}

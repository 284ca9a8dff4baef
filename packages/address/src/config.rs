//! Configuration constants and structural validation for addresses.

use regex::Regex;
use std::sync::LazyLock;

/// Example address shown to users entering an address.
pub const EXAMPLE: &str = "123, some street, some unit, 123456";

/// User-facing message for a structurally invalid address.
pub const MESSAGE_ADDRESS_CONSTRAINTS: &str = "Invalid address entered";

/// Usage hint reported before a structural failure is returned.
pub const MESSAGE_USAGE: &str =
    "An address is BLOCK STREET UNIT POSTAL_CODE, separated by single spaces";

/// Character-shape pattern every address must fully match.
///
/// A non-empty run of characters with no line terminator (`\n`, `\r`,
/// U+0085, U+2028, U+2029).
pub const ADDRESS_VALIDATION_REGEX: &str = r"[^\n\r\x{85}\x{2028}\x{2029}]+";

/// Number of tokens an address splits into.
pub const TOKEN_COUNT: usize = 4;

/// Separator between address tokens.
pub const TOKEN_SEPARATOR: char = ' ';

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{ADDRESS_VALIDATION_REGEX}$")).expect("valid regex")
});

/// What to do when a field type rejects its token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldFailurePolicy {
    /// Keep the address, leave the field unset and record a warning.
    #[default]
    Tolerate,
    /// Fail construction with the first field error.
    Reject,
}

/// Split text into address tokens on single spaces.
///
/// Consecutive separators produce empty tokens, which are kept so the count
/// stays purely positional.
///
/// # Examples
/// ```
/// use addressbook_address::config::split_tokens;
///
/// assert_eq!(split_tokens("A B C D"), vec!["A", "B", "C", "D"]);
/// assert_eq!(split_tokens("A  B C"), vec!["A", "", "B", "C"]);
/// ```
#[must_use]
pub fn split_tokens(text: &str) -> Vec<&str> {
    text.split(TOKEN_SEPARATOR).collect()
}

/// Returns true if the candidate is a structurally valid address.
///
/// The candidate is trimmed first, so this agrees with
/// [`Address::new`](crate::Address::new) for every input.
///
/// # Examples
/// ```
/// use addressbook_address::config::is_valid_address;
///
/// assert!(is_valid_address("A B C D"));
/// assert!(is_valid_address("  10 Ave3 #12-34 120123 "));
/// assert!(!is_valid_address("123 Main St Unit5 099999"));
/// assert!(!is_valid_address(""));
/// ```
#[must_use]
pub fn is_valid_address(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    ADDRESS_PATTERN.is_match(trimmed) && split_tokens(trimmed).len() == TOKEN_COUNT
}

use crate::stats::GLOBAL_STATS;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

const CHECK_DIGIT_INDEX: usize = 7;

lazy_static! {
    // A formal business id typed without its hyphen, e.g. "12345671"
    static ref MISSING_SEPARATOR: Regex = Regex::new(r"^[0-9]{8}$").unwrap();
}

/// Returns true if the value should be treated as "no business id present".
///
/// Only the empty string is blank, whitespace is a (malformed) value.
pub fn is_blank(value: &str) -> bool {
    value.is_empty()
}

/// Rewrites a business id written as 8 consecutive digits into the formal
/// `1234567-1` shape. Every other input is returned unchanged.
pub fn normalize(raw: &str) -> Cow<'_, str> {
    if !MISSING_SEPARATOR.is_match(raw) {
        return Cow::Borrowed(raw);
    }

    GLOBAL_STATS.normalizations.increment(1);

    // The pattern only matches ASCII digits, so byte indexing is on char boundaries
    let (prefix, check_digit) = raw.split_at(CHECK_DIGIT_INDEX);
    let mut normalized = String::with_capacity(raw.len() + 1);
    normalized.push_str(prefix);
    normalized.push('-');
    normalized.push_str(check_digit);
    Cow::Owned(normalized)
}

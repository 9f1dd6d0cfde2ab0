mod finnish_business_id_checksum;

pub use crate::secondary_validation::finnish_business_id_checksum::{
    compute_check_digit, is_valid_checksum, FinnishBusinessIdChecksum,
};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Weighted modulo 11 check used by several national identifiers.
///
/// Every digit of the input is collected (any other character is skipped). The first
/// `weights.len()` digits are multiplied positionally by `weights` and summed, and the
/// remainder of that sum modulo 11 is given to `expected_check_digit`. The digit that
/// follows the weighted digits must equal the returned value. A `None` returned by
/// `expected_check_digit` rejects the input.
fn validate_mod11_weighted_checksum(
    regex_match: &str,
    weights: &[u32],
    expected_check_digit: impl Fn(u32) -> Option<u32>,
) -> bool {
    let mut digits = regex_match.chars().filter_map(|c| c.to_digit(10));

    let mut sum = 0;
    let mut weighted_digits = 0;
    for (weight, digit) in weights.iter().zip(digits.by_ref()) {
        sum += weight * digit;
        weighted_digits += 1;
    }
    if weighted_digits != weights.len() {
        return false;
    }

    match (digits.next(), expected_check_digit(sum % 11)) {
        (Some(actual), Some(expected)) => actual == expected,
        _ => false,
    }
}

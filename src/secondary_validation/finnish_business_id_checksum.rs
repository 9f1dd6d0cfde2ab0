use crate::secondary_validation::{validate_mod11_weighted_checksum, Validator};

pub struct FinnishBusinessIdChecksum;

const MULTIPLIERS: &[u32; 7] = &[7, 9, 10, 5, 8, 4, 2];
const MODULO: u32 = 11;

/// Check digit expected for the given remainder of the weighted sum.
///
/// A remainder of 1 gives 10, which no single digit can ever equal: such prefixes
/// are never handed out as business ids.
fn expected_check_digit(remainder: u32) -> u32 {
    if remainder == 0 {
        0
    } else {
        MODULO - remainder
    }
}

impl Validator for FinnishBusinessIdChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        // The business id is written as 1234567-1, the last digit is the check digit
        validate_mod11_weighted_checksum(regex_match, MULTIPLIERS, |remainder| {
            Some(expected_check_digit(remainder))
        })
    }
}

/// Verifies the check digit of a business id in the formal `1234567-1` format.
///
/// Only the digits of `business_id` are considered, and digits after the check
/// digit are ignored: the value is expected to already match the formal format
/// (see [crate::is_valid_format]).
pub fn is_valid_checksum(business_id: &str) -> bool {
    FinnishBusinessIdChecksum.is_valid_match(business_id)
}

/// Computes the check digit for a 7 digit business id prefix.
///
/// Returns `None` if the prefix is not 7 ASCII digits, or if no check digit can
/// satisfy the checksum for this prefix.
pub fn compute_check_digit(prefix: &str) -> Option<u32> {
    if prefix.len() != MULTIPLIERS.len() {
        return None;
    }

    let mut sum = 0;
    for (weight, c) in MULTIPLIERS.iter().zip(prefix.chars()) {
        sum += weight * c.to_digit(10)?;
    }

    let check_digit = expected_check_digit(sum % MODULO);
    if check_digit > 9 {
        return None;
    }
    Some(check_digit)
}

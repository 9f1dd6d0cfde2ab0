use crate::error::BusinessIdError;
use crate::normalization::is_blank;
use crate::secondary_validation::is_valid_checksum;
use lazy_static::lazy_static;
use regex::Regex;
use strum::{Display, EnumIter};

lazy_static! {
    static ref FORMAL_FORMAT: Regex = Regex::new(r"^[0-9]{7}-[0-9]$").unwrap();
    static ref REGISTERED_ASSOCIATION_FORMAT: Regex = Regex::new(r"^[0-9]{3}\.[0-9]{3}$").unwrap();
}

/// The shapes a Finnish business id can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum BusinessIdFormat {
    /// 7 digits, a hyphen and a check digit, e.g. `1234567-1`
    Formal,
    /// Registered association (rekisteröity yhdistys), e.g. `123.456`. No checksum is defined.
    RegisteredAssociation,
}

impl BusinessIdFormat {
    /// The shape shown to users when their input doesn't match any format
    pub fn example(&self) -> &'static str {
        match self {
            BusinessIdFormat::Formal => "1234567-1",
            BusinessIdFormat::RegisteredAssociation => "123.456",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            BusinessIdFormat::Formal => &*FORMAL_FORMAT,
            BusinessIdFormat::RegisteredAssociation => &*REGISTERED_ASSOCIATION_FORMAT,
        }
    }
}

/// Returns the format the (non blank) business id is written in, if any.
pub fn detect_format(business_id: &str) -> Option<BusinessIdFormat> {
    // The association format is checked first, it never needs a checksum
    [
        BusinessIdFormat::RegisteredAssociation,
        BusinessIdFormat::Formal,
    ]
    .into_iter()
    .find(|format| format.pattern().is_match(business_id))
}

/// Checks that a business id is blank or written in one of the accepted formats.
///
/// A value in the formal format still needs its check digit verified with
/// [crate::is_valid_checksum].
pub fn is_valid_format(business_id: &str) -> bool {
    is_blank(business_id) || detect_format(business_id).is_some()
}

/// Validates a Finnish business id: the format first, then the check digit of
/// formal business ids. Blank values are valid.
pub fn validate_business_id(business_id: &str) -> Result<(), BusinessIdError> {
    if is_blank(business_id) {
        return Ok(());
    }

    match detect_format(business_id) {
        None => Err(BusinessIdError::InvalidFormat {
            business_id: business_id.to_string(),
        }),
        Some(BusinessIdFormat::RegisteredAssociation) => Ok(()),
        Some(BusinessIdFormat::Formal) => {
            if is_valid_checksum(business_id) {
                Ok(())
            } else {
                Err(BusinessIdError::InvalidChecksum {
                    business_id: business_id.to_string(),
                })
            }
        }
    }
}

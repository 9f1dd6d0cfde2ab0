use crate::validation::BusinessIdFormat;
use thiserror::Error;

/// A business id rejected by a country validator. The messages are meant to be
/// shown to the user who entered the value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessIdError {
    /// The value matches none of the accepted formats
    #[error(
        "Your business id '{business_id}' is invalid. Please use format {}",
        BusinessIdFormat::Formal.example()
    )]
    InvalidFormat { business_id: String },

    /// The value has the formal format, but the check digit doesn't match
    #[error("Your business id '{business_id}' is invalid. Please check the given business id")]
    InvalidChecksum { business_id: String },
}

impl BusinessIdError {
    /// The rejected value, as it was given to the validator
    pub fn business_id(&self) -> &str {
        match self {
            BusinessIdError::InvalidFormat { business_id }
            | BusinessIdError::InvalidChecksum { business_id } => business_id,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CreateRegistryError {
    #[error("Country codes must not be empty")]
    EmptyCountryCode,

    #[error("Country code '{0}' is not a two letter ISO 3166-1 code")]
    InvalidCountryCode(String),

    #[error("Country '{0}' has more than one validator")]
    DuplicateCountry(String),
}

impl From<CreateRegistryError> for i64 {
    fn from(value: CreateRegistryError) -> i64 {
        match value {
            CreateRegistryError::EmptyCountryCode => -2,
            CreateRegistryError::InvalidCountryCode(_) => -3,
            CreateRegistryError::DuplicateCountry(_) => -4,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_error_message_shows_expected_shape() {
        let err = BusinessIdError::InvalidFormat {
            business_id: "12-34".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Your business id '12-34' is invalid. Please use format 1234567-1"
        );
        assert_eq!(err.business_id(), "12-34");
    }

    #[test]
    fn checksum_error_message_echoes_input() {
        let err = BusinessIdError::InvalidChecksum {
            business_id: "1234567-0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Your business id '1234567-0' is invalid. Please check the given business id"
        );
        assert_eq!(err.business_id(), "1234567-0");
    }

    #[test]
    fn create_registry_error_codes() {
        assert_eq!(i64::from(CreateRegistryError::EmptyCountryCode), -2);
        assert_eq!(
            i64::from(CreateRegistryError::InvalidCountryCode("FIN".to_string())),
            -3
        );
        assert_eq!(
            i64::from(CreateRegistryError::DuplicateCountry("FI".to_string())),
            -4
        );
    }
}

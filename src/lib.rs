// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod config;
mod error;
mod normalization;
mod observability;
mod partner;
mod registry;
mod secondary_validation;
mod stats;
mod validation;

// This is the public API of the business id library
pub use config::{CountryRuleConfig, RegistryConfig};
pub use error::{BusinessIdError, CreateRegistryError};
pub use normalization::{is_blank, normalize};
pub use observability::labels::Labels;
pub use partner::PartnerRecord;
pub use registry::{CountryValidator, ValidatorRegistry, ValidatorRegistryBuilder};
pub use secondary_validation::{compute_check_digit, is_valid_checksum};
pub use validation::{detect_format, is_valid_format, validate_business_id, BusinessIdFormat};

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::secondary_validation::{FinnishBusinessIdChecksum, Validator};

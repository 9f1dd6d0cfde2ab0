mod metrics;

use crate::config::CountryRuleConfig;
use crate::error::{BusinessIdError, CreateRegistryError};
use crate::normalization::is_blank;
use crate::observability::labels::Labels;
use crate::registry::metrics::{CountryMetrics, RegistryMetrics};
use crate::stats::GLOBAL_STATS;
use crate::validation::validate_business_id;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const FINLAND: &str = "FI";

/// Business id validation scheme of a country.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum CountryValidator {
    /// Finnish business id (Y-tunnus): `1234567-1` with a check digit, or `123.456`
    FinnishBusinessId,
}

impl CountryValidator {
    pub fn validate(&self, business_id: &str) -> Result<(), BusinessIdError> {
        match self {
            CountryValidator::FinnishBusinessId => validate_business_id(business_id),
        }
    }
}

struct RegisteredValidator {
    validator: CountryValidator,
    metrics: CountryMetrics,
}

/// Dispatches business id validation to the validator registered for the
/// country of the record. Countries without a validator accept any value.
pub struct ValidatorRegistry {
    validators: HashMap<String, RegisteredValidator>,
    metrics: RegistryMetrics,
}

impl ValidatorRegistry {
    pub fn builder(rules: &[CountryRuleConfig]) -> ValidatorRegistryBuilder {
        ValidatorRegistryBuilder::new(rules)
    }

    /// Validates `business_id` for the given country.
    ///
    /// Blank business ids are always valid. Values are accepted unchecked when the
    /// country is absent or has no registered validator.
    pub fn validate(
        &self,
        country_code: Option<&str>,
        business_id: &str,
    ) -> Result<(), BusinessIdError> {
        if is_blank(business_id) {
            return Ok(());
        }

        let Some(registered) = country_code.and_then(|code| self.get(code)) else {
            self.metrics.skipped.increment(1);
            return Ok(());
        };

        registered.metrics.validations.increment(1);
        let result = registered.validator.validate(business_id);
        match &result {
            Ok(()) => {}
            Err(BusinessIdError::InvalidFormat { .. }) => {
                registered.metrics.format_errors.increment(1)
            }
            Err(BusinessIdError::InvalidChecksum { .. }) => {
                registered.metrics.checksum_errors.increment(1)
            }
        }
        result
    }

    /// The validator registered for a country, if any. The code must match the
    /// registered (upper-case) code exactly.
    pub fn validator_for(&self, country_code: &str) -> Option<CountryValidator> {
        self.get(country_code).map(|registered| registered.validator)
    }

    fn get(&self, country_code: &str) -> Option<&RegisteredValidator> {
        self.validators.get(country_code)
    }

    // Both the builder and `default` go through here, `rules` must hold valid unique codes
    fn from_checked_rules(
        rules: impl IntoIterator<Item = (String, CountryValidator)>,
        labels: &Labels,
    ) -> Self {
        let validators = rules
            .into_iter()
            .map(|(country_code, validator)| {
                let metrics = CountryMetrics::new(labels, &country_code);
                (country_code, RegisteredValidator { validator, metrics })
            })
            .collect();

        GLOBAL_STATS.registry_creations.increment(1);
        ValidatorRegistry {
            validators,
            metrics: RegistryMetrics::new(labels),
        }
    }
}

impl Default for ValidatorRegistry {
    /// A registry validating Finnish business ids only
    fn default() -> Self {
        ValidatorRegistry::from_checked_rules(
            [(FINLAND.to_string(), CountryValidator::FinnishBusinessId)],
            &Labels::empty(),
        )
    }
}

pub struct ValidatorRegistryBuilder {
    rules: Vec<CountryRuleConfig>,
    labels: Labels,
}

impl ValidatorRegistryBuilder {
    pub fn new(rules: &[CountryRuleConfig]) -> Self {
        Self {
            rules: rules.to_vec(),
            labels: Labels::empty(),
        }
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Configured country codes are upper-cased, lookups are exact.
    pub fn build(self) -> Result<ValidatorRegistry, CreateRegistryError> {
        let mut checked_rules: Vec<(String, CountryValidator)> =
            Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let country_code = validate_country_code(&rule.country_code)?;
            if checked_rules.iter().any(|(code, _)| *code == country_code) {
                return Err(CreateRegistryError::DuplicateCountry(country_code));
            }
            checked_rules.push((country_code, rule.validator));
        }

        Ok(ValidatorRegistry::from_checked_rules(
            checked_rules,
            &self.labels,
        ))
    }
}

/// Returns the upper-cased country code if it is two ASCII letters.
fn validate_country_code(country_code: &str) -> Result<String, CreateRegistryError> {
    let country_code = country_code.trim();
    if country_code.is_empty() {
        return Err(CreateRegistryError::EmptyCountryCode);
    }
    if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CreateRegistryError::InvalidCountryCode(
            country_code.to_string(),
        ));
    }
    Ok(country_code.to_ascii_uppercase())
}

use crate::error::CreateRegistryError;
use crate::observability::labels::Labels;
use crate::registry::{CountryValidator, ValidatorRegistry, FINLAND};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CountryRuleConfig {
    pub country_code: String,
    pub validator: CountryValidator,
}

impl CountryRuleConfig {
    pub fn new(country_code: &str, validator: CountryValidator) -> Self {
        Self {
            country_code: country_code.to_owned(),
            validator,
        }
    }
}

/// Configuration of a [ValidatorRegistry]: which validator runs for which country.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RegistryConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub countries: Vec<CountryRuleConfig>,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl RegistryConfig {
    /// A configuration without any country, every business id is accepted unchecked
    pub fn empty() -> Self {
        Self {
            countries: vec![],
            labels: Labels::empty(),
        }
    }

    pub fn country(&self, country_code: &str, validator: CountryValidator) -> Self {
        self.mutate_clone(|x| x.countries.push(CountryRuleConfig::new(country_code, validator)))
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> Result<ValidatorRegistry, CreateRegistryError> {
        ValidatorRegistry::builder(&self.countries)
            .labels(self.labels.clone())
            .build()
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig::empty().country(FINLAND, CountryValidator::FinnishBusinessId)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::BusinessIdError;

    #[test]
    fn should_have_default() {
        assert_eq!(
            RegistryConfig::default(),
            RegistryConfig {
                countries: vec![CountryRuleConfig {
                    country_code: "FI".to_string(),
                    validator: CountryValidator::FinnishBusinessId,
                }],
                labels: Labels::empty(),
            }
        );
    }

    #[test]
    fn should_add_country() {
        let config = RegistryConfig::empty()
            .country("FI", CountryValidator::FinnishBusinessId)
            .labels(Labels::new(&[("env", "test")]));
        assert_eq!(config.countries.len(), 1);
        assert_eq!(config.labels, Labels::new(&[("env", "test")]));

        // Setters return a modified clone
        let empty = RegistryConfig::empty();
        let _ = empty.country("FI", CountryValidator::FinnishBusinessId);
        assert!(empty.countries.is_empty());
    }

    #[test]
    fn should_deserialize_from_json() {
        let json_config = r#"{
            "countries": [
                {"country_code": "FI", "validator": {"type": "FinnishBusinessId"}}
            ],
            "labels": {"service": "crm"}
        }"#;
        let config: RegistryConfig = serde_json::from_str(json_config).unwrap();
        assert_eq!(
            config,
            RegistryConfig::default().labels(Labels::new(&[("service", "crm")]))
        );
    }

    #[test]
    fn null_fields_should_have_default() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{"countries": null, "labels": null}"#).unwrap();
        assert_eq!(config, RegistryConfig::empty());

        let config: RegistryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RegistryConfig::empty());
    }

    #[test]
    fn unknown_validator_type_is_rejected() {
        let json_config = r#"{
            "countries": [
                {"country_code": "SE", "validator": {"type": "SwedishOrgNumber"}}
            ]
        }"#;
        assert!(serde_json::from_str::<RegistryConfig>(json_config).is_err());
    }

    #[test]
    fn should_build_registry() {
        let registry = RegistryConfig::default().build().unwrap();
        assert_eq!(
            registry.validate(Some("FI"), "1234567-0"),
            Err(BusinessIdError::InvalidChecksum {
                business_id: "1234567-0".to_string()
            })
        );

        let err = RegistryConfig::empty()
            .country("Finland", CountryValidator::FinnishBusinessId)
            .build()
            .err();
        assert_eq!(
            err,
            Some(CreateRegistryError::InvalidCountryCode("Finland".to_string()))
        );
    }
}

use crate::observability::labels::Labels;
use metrics::{counter, Counter};

const TYPE: &str = "type";
const COUNTRY: &str = "country";

/// Counters of a single country validator registered in a [crate::ValidatorRegistry]
pub struct CountryMetrics {
    pub validations: Counter,
    pub format_errors: Counter,
    pub checksum_errors: Counter,
}

impl CountryMetrics {
    pub fn new(registry_labels: &Labels, country_code: &str) -> Self {
        let labels = registry_labels.clone_with_labels(&[(COUNTRY, country_code.to_string())]);
        CountryMetrics {
            validations: counter!("business_id.validations", labels.clone()),
            format_errors: counter!(
                "business_id.errors",
                labels.clone_with_labels(&[(TYPE, "format")])
            ),
            checksum_errors: counter!(
                "business_id.errors",
                labels.clone_with_labels(&[(TYPE, "checksum")])
            ),
        }
    }
}

/// Counters that are not tied to a registered country
pub struct RegistryMetrics {
    // Commits accepted without validation (no country, or no validator for the country)
    pub skipped: Counter,
}

impl RegistryMetrics {
    pub fn new(registry_labels: &Labels) -> Self {
        RegistryMetrics {
            skipped: counter!("business_id.skipped", registry_labels.clone()),
        }
    }
}

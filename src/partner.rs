use crate::error::BusinessIdError;
use crate::normalization::{is_blank, normalize};
use crate::registry::ValidatorRegistry;

/// The business id and country of a customer or partner, as seen by the record
/// layer. Edits are normalized as they are typed, commits are validated against the
/// country of the record and leave the record untouched when rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartnerRecord {
    country_code: Option<String>,
    business_id: Option<String>,
}

impl PartnerRecord {
    pub fn new(country_code: Option<&str>) -> Self {
        Self {
            country_code: country_code.map(str::to_owned),
            business_id: None,
        }
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn business_id(&self) -> Option<&str> {
        self.business_id.as_deref()
    }

    /// Returns the pending value of the business id field after an edit.
    pub fn edit_business_id(&self, raw: &str) -> String {
        normalize(raw).into_owned()
    }

    /// Validates `business_id` for the country of this record and stores it.
    ///
    /// A blank value clears the business id.
    pub fn commit_business_id(
        &mut self,
        business_id: &str,
        registry: &ValidatorRegistry,
    ) -> Result<(), BusinessIdError> {
        registry.validate(self.country_code(), business_id)?;
        self.business_id = if is_blank(business_id) {
            None
        } else {
            Some(business_id.to_owned())
        };
        Ok(())
    }

    /// Changes the country of the record. The stored business id is validated
    /// against the new country first.
    pub fn commit_country_code(
        &mut self,
        country_code: Option<&str>,
        registry: &ValidatorRegistry,
    ) -> Result<(), BusinessIdError> {
        if let Some(business_id) = self.business_id() {
            registry.validate(country_code, business_id)?;
        }
        self.country_code = country_code.map(str::to_owned);
        Ok(())
    }
}

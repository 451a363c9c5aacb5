use geo_atlas_client::{Countries, CountryDetails, CountryRequest};

use super::{require, EntityForm};
use crate::error::CoreResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryForm {
    pub name: String,
    pub code: String,
}

impl CountryForm {
    pub fn from_details(details: &CountryDetails) -> Self {
        Self {
            name: details.name.clone(),
            code: details.code.clone(),
        }
    }
}

impl EntityForm for CountryForm {
    type Target = Countries;

    fn validate(&self) -> CoreResult<()> {
        require(!self.name.trim().is_empty(), "Name")?;
        require(!self.code.trim().is_empty(), "Code")
    }

    fn to_request(&self) -> CoreResult<CountryRequest> {
        self.validate()?;
        Ok(CountryRequest {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
        })
    }
}

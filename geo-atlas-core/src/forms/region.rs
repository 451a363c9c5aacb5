use geo_atlas_client::{GeoId, RegionDetails, RegionRequest, Regions};

use super::{non_blank, require, EntityForm};
use crate::error::CoreResult;

/// Region dialog. Only the country tier of the cascade is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionForm {
    pub country_id: Option<GeoId>,
    pub name: String,
    pub region_type: String,
}

impl RegionForm {
    pub fn from_details(details: &RegionDetails) -> Self {
        Self {
            country_id: GeoId::non_zero(Some(details.country_id)),
            name: details.name.clone(),
            region_type: details.region_type.clone().unwrap_or_default(),
        }
    }
}

impl EntityForm for RegionForm {
    type Target = Regions;

    fn validate(&self) -> CoreResult<()> {
        require(!self.name.trim().is_empty(), "Name")?;
        require(GeoId::non_zero(self.country_id).is_some(), "Country")
    }

    fn to_request(&self) -> CoreResult<RegionRequest> {
        self.validate()?;
        Ok(RegionRequest {
            country_id: self.country_id.unwrap_or_default(),
            name: self.name.trim().to_string(),
            region_type: non_blank(&self.region_type),
        })
    }
}

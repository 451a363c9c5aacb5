use geo_atlas_client::{GeoId, LandmarkDetails, LandmarkRequest, Landmarks};

use super::{
    format_optional, non_blank, parse_nullable_int, parse_nullable_number, require, EntityForm,
};
use crate::error::CoreResult;
use crate::selection::LocationSelection;

/// Landmark dialog: full country → region → city chain plus descriptive fields.
///
/// The three classification fields keep the raw wire code, so an unmapped value
/// loaded from the server is sent back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkForm {
    pub selection: LocationSelection,
    pub name: String,
    pub description: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub first_mention_year: String,
    pub protection_status: i32,
    pub physical_condition: i32,
    pub accessibility_status: i32,
    pub external_registry_url: String,
}

impl Default for LandmarkForm {
    fn default() -> Self {
        Self {
            selection: LocationSelection::new(),
            name: String::new(),
            description: String::new(),
            address: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            first_mention_year: String::new(),
            protection_status: 0,
            physical_condition: 0,
            accessibility_status: 0,
            external_registry_url: String::new(),
        }
    }
}

impl LandmarkForm {
    /// Fills the form from a landmark whose chain was already resolved.
    pub fn from_details(details: &LandmarkDetails, selection: LocationSelection) -> Self {
        Self {
            selection,
            name: details.name.clone(),
            description: details.description.clone().unwrap_or_default(),
            address: details.address.clone().unwrap_or_default(),
            latitude: format_optional(details.latitude),
            longitude: format_optional(details.longitude),
            first_mention_year: format_optional(details.first_mention_year),
            protection_status: details.protection_status,
            physical_condition: details.physical_condition,
            accessibility_status: details.accessibility_status,
            external_registry_url: details.external_registry_url.clone().unwrap_or_default(),
        }
    }
}

impl EntityForm for LandmarkForm {
    type Target = Landmarks;

    fn validate(&self) -> CoreResult<()> {
        require(!self.name.trim().is_empty(), "Name")?;
        require(GeoId::non_zero(self.selection.city_id).is_some(), "City")
    }

    fn to_request(&self) -> CoreResult<LandmarkRequest> {
        self.validate()?;
        Ok(LandmarkRequest {
            city_id: self.selection.city_id.unwrap_or_default(),
            name: self.name.trim().to_string(),
            description: non_blank(&self.description),
            address: non_blank(&self.address),
            latitude: parse_nullable_number(&self.latitude),
            longitude: parse_nullable_number(&self.longitude),
            first_mention_year: parse_nullable_int(&self.first_mention_year),
            protection_status: self.protection_status,
            physical_condition: self.physical_condition,
            accessibility_status: self.accessibility_status,
            external_registry_url: non_blank(&self.external_registry_url),
        })
    }
}

use geo_atlas_client::{Cities, CityDetails, CityRequest, GeoId};

use super::{format_optional, parse_nullable_number, require, EntityForm};
use crate::error::CoreResult;
use crate::selection::LocationSelection;

/// City dialog: country and region from the cascade, plus coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CityForm {
    pub selection: LocationSelection,
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}

impl Default for CityForm {
    fn default() -> Self {
        Self {
            selection: LocationSelection::new(),
            name: String::new(),
            latitude: String::new(),
            longitude: String::new(),
        }
    }
}

impl CityForm {
    pub fn from_details(details: &CityDetails) -> Self {
        Self {
            selection: LocationSelection::resolved(
                Some(details.country_id),
                details.region_id,
                None,
            ),
            name: details.name.clone(),
            latitude: format_optional(details.latitude),
            longitude: format_optional(details.longitude),
        }
    }
}

impl EntityForm for CityForm {
    type Target = Cities;

    fn validate(&self) -> CoreResult<()> {
        require(!self.name.trim().is_empty(), "Name")?;
        require(self.selection.country_id.is_some(), "Country")
    }

    fn to_request(&self) -> CoreResult<CityRequest> {
        self.validate()?;
        Ok(CityRequest {
            country_id: self.selection.country_id.unwrap_or_default(),
            region_id: GeoId::non_zero(self.selection.region_id),
            name: self.name.trim().to_string(),
            latitude: parse_nullable_number(&self.latitude),
            longitude: parse_nullable_number(&self.longitude),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::city_details;

    #[test]
    fn edit_round_trips_details() {
        let mut details = city_details(3, 1, Some(2), "Warsaw");
        details.latitude = Some(52.23);
        let form = CityForm::from_details(&details);
        assert_eq!(form.latitude, "52.23");
        assert_eq!(form.longitude, "");

        let req = form.to_request().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(req.country_id, GeoId(1));
        assert_eq!(req.region_id, Some(GeoId(2)));
        assert_eq!(req.latitude, Some(52.23));
        assert_eq!(req.longitude, None);
    }

    #[test]
    fn name_and_country_are_required() {
        let mut form = CityForm {
            name: "Warsaw".into(),
            ..CityForm::default()
        };
        assert!(form.validate().is_err());
        form.selection.select_country(Some(GeoId(1)));
        assert!(form.validate().is_ok());
        form.name = " ".into();
        assert!(form.validate().is_err());
    }
}

use std::fmt;

use geo_atlas_client::{CityListItem, CountryListItem, GeoId, RegionListItem};
use serde::Serialize;

/// One entry of a cascade option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoOption {
    pub id: GeoId,
    pub name: String,
    /// Secondary text; the country code for countries.
    pub auxiliary: Option<String>,
}

impl GeoOption {
    pub fn new(id: GeoId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            auxiliary: None,
        }
    }

    #[must_use]
    pub fn with_auxiliary(mut self, auxiliary: impl Into<String>) -> Self {
        self.auxiliary = Some(auxiliary.into());
        self
    }

    /// Display text: `"Name (AUX)"` when auxiliary text is present, else `"Name"`.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeoOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.auxiliary.as_deref().filter(|a| !a.is_empty()) {
            Some(aux) => write!(f, "{} ({aux})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl From<CountryListItem> for GeoOption {
    fn from(c: CountryListItem) -> Self {
        Self::new(c.id, c.name).with_auxiliary(c.code)
    }
}

impl From<RegionListItem> for GeoOption {
    fn from(r: RegionListItem) -> Self {
        Self::new(r.id, r.name)
    }
}

impl From<CityListItem> for GeoOption {
    fn from(c: CityListItem) -> Self {
        Self::new(c.id, c.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_renders_with_code() {
        let option = GeoOption::from(CountryListItem {
            id: GeoId(1),
            name: "Poland".into(),
            code: "PL".into(),
        });
        assert_eq!(option.display(), "Poland (PL)");
    }

    #[test]
    fn region_renders_name_only() {
        let option = GeoOption::from(RegionListItem {
            id: GeoId(2),
            country_id: GeoId(1),
            name: "Mazovia".into(),
            region_type: None,
        });
        assert_eq!(option.display(), "Mazovia");
    }
}

use geo_atlas_client::GeoId;

/// The consumer-owned selection of a cascade.
///
/// The setters keep the chain consistent: a region or city never outlives
/// the country it belongs to, and a city never outlives its region.
/// The filter bar and both forms share these rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocationSelection {
    pub country_id: Option<GeoId>,
    pub region_id: Option<GeoId>,
    pub city_id: Option<GeoId>,
}

impl LocationSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the whole chain at once, as when editing a persisted entity.
    ///
    /// Zero ids count as unset. Without a country the rest of the chain is dropped.
    pub fn resolved(
        country_id: Option<GeoId>,
        region_id: Option<GeoId>,
        city_id: Option<GeoId>,
    ) -> Self {
        let country_id = GeoId::non_zero(country_id);
        if country_id.is_none() {
            return Self::new();
        }
        Self {
            country_id,
            region_id: GeoId::non_zero(region_id),
            city_id: GeoId::non_zero(city_id),
        }
    }

    /// Selects a country. Returns `true` when the selection changed, in which case
    /// region and city are cleared.
    pub fn select_country(&mut self, country_id: Option<GeoId>) -> bool {
        let country_id = GeoId::non_zero(country_id);
        if country_id == self.country_id {
            return false;
        }
        self.country_id = country_id;
        self.region_id = None;
        self.city_id = None;
        true
    }

    /// Selects a region. Returns `true` when the selection changed, in which case
    /// the city is cleared, including when the region goes back to empty.
    ///
    /// Ignored while no country is selected.
    pub fn select_region(&mut self, region_id: Option<GeoId>) -> bool {
        let region_id = GeoId::non_zero(region_id);
        if self.country_id.is_none() || region_id == self.region_id {
            return false;
        }
        self.region_id = region_id;
        self.city_id = None;
        true
    }

    /// Selects a city. Returns `true` when the selection changed.
    ///
    /// Ignored while no country is selected.
    pub fn select_city(&mut self, city_id: Option<GeoId>) -> bool {
        let city_id = GeoId::non_zero(city_id);
        if self.country_id.is_none() || city_id == self.city_id {
            return false;
        }
        self.city_id = city_id;
        true
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> LocationSelection {
        LocationSelection::resolved(Some(GeoId(1)), Some(GeoId(2)), Some(GeoId(3)))
    }

    #[test]
    fn country_change_clears_region_and_city() {
        let mut sel = chain();
        assert!(sel.select_country(Some(GeoId(9))));
        assert_eq!(sel.country_id, Some(GeoId(9)));
        assert_eq!(sel.region_id, None);
        assert_eq!(sel.city_id, None);
    }

    #[test]
    fn clearing_country_clears_everything() {
        let mut sel = chain();
        assert!(sel.select_country(None));
        assert_eq!(sel, LocationSelection::new());
    }

    #[test]
    fn same_country_is_a_no_op() {
        let mut sel = chain();
        assert!(!sel.select_country(Some(GeoId(1))));
        assert_eq!(sel.city_id, Some(GeoId(3)));
    }

    #[test]
    fn region_change_clears_city() {
        let mut sel = chain();
        assert!(sel.select_region(Some(GeoId(5))));
        assert_eq!(sel.region_id, Some(GeoId(5)));
        assert_eq!(sel.city_id, None);
    }

    #[test]
    fn clearing_region_clears_city() {
        let mut sel = chain();
        assert!(sel.select_region(None));
        assert_eq!(sel.country_id, Some(GeoId(1)));
        assert_eq!(sel.region_id, None);
        assert_eq!(sel.city_id, None);
    }

    #[test]
    fn same_region_keeps_city() {
        let mut sel = chain();
        assert!(!sel.select_region(Some(GeoId(2))));
        assert_eq!(sel.city_id, Some(GeoId(3)));
    }

    #[test]
    fn region_and_city_need_a_country() {
        let mut sel = LocationSelection::new();
        assert!(!sel.select_region(Some(GeoId(2))));
        assert!(!sel.select_city(Some(GeoId(3))));
        assert_eq!(sel, LocationSelection::new());
    }

    #[test]
    fn resolved_chain_without_country_is_empty() {
        let sel = LocationSelection::resolved(Some(GeoId(0)), Some(GeoId(2)), None);
        assert_eq!(sel.region_id, None);
        assert_eq!(sel.country_id, None);
    }
}

//! Cascade options backed by the REST repositories

use std::sync::Arc;

use async_trait::async_trait;
use geo_atlas_client::{
    Cities, CityQuery, Countries, CountryQuery, EntityRepository, GeoId, RegionQuery, Regions,
};

use crate::error::CoreResult;
use crate::traits::LocationSource;
use crate::types::GeoOption;

/// Loads non-deleted countries, regions and cities from the API.
pub struct RemoteLocationSource {
    countries: Arc<dyn EntityRepository<Countries>>,
    regions: Arc<dyn EntityRepository<Regions>>,
    cities: Arc<dyn EntityRepository<Cities>>,
}

impl RemoteLocationSource {
    #[must_use]
    pub fn new(
        countries: Arc<dyn EntityRepository<Countries>>,
        regions: Arc<dyn EntityRepository<Regions>>,
        cities: Arc<dyn EntityRepository<Cities>>,
    ) -> Self {
        Self {
            countries,
            regions,
            cities,
        }
    }
}

#[async_trait]
impl LocationSource for RemoteLocationSource {
    async fn list_countries(&self) -> CoreResult<Vec<GeoOption>> {
        let query = CountryQuery {
            include_deleted: Some(false),
        };
        let items = self.countries.list(&query).await?;
        Ok(items.into_iter().map(GeoOption::from).collect())
    }

    async fn list_regions(&self, country_id: GeoId) -> CoreResult<Vec<GeoOption>> {
        let query = RegionQuery {
            country_id: Some(country_id),
            include_deleted: Some(false),
        };
        let items = self.regions.list(&query).await?;
        Ok(items.into_iter().map(GeoOption::from).collect())
    }

    async fn list_cities(
        &self,
        country_id: GeoId,
        region_id: Option<GeoId>,
    ) -> CoreResult<Vec<GeoOption>> {
        let query = CityQuery {
            country_id: Some(country_id),
            region_id,
            include_deleted: Some(false),
            ..CityQuery::default()
        };
        let items = self.cities.list(&query).await?;
        Ok(items.into_iter().map(GeoOption::from).collect())
    }
}

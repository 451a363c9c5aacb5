//! Cascade option source Trait

use async_trait::async_trait;

use geo_atlas_client::GeoId;

use crate::error::CoreResult;
use crate::types::GeoOption;

/// Loads the option lists of the three cascade tiers.
///
/// Only non-deleted entities are returned, in backend order.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// All countries.
    async fn list_countries(&self) -> CoreResult<Vec<GeoOption>>;

    /// Regions of a country.
    ///
    /// # Arguments
    /// * `country_id` - Country scope
    async fn list_regions(&self, country_id: GeoId) -> CoreResult<Vec<GeoOption>>;

    /// Cities of a country, optionally narrowed to one region.
    ///
    /// # Arguments
    /// * `country_id` - Country scope
    /// * `region_id` - Optional region filter
    async fn list_cities(
        &self,
        country_id: GeoId,
        region_id: Option<GeoId>,
    ) -> CoreResult<Vec<GeoOption>>;
}

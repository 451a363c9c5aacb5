//! Opens an existing landmark for editing

use std::sync::Arc;

use geo_atlas_client::{Cities, EntityRepository, GeoId, LandmarkDetails, Landmarks};

use crate::error::{CoreError, CoreResult};
use crate::selection::LocationSelection;
use crate::traits::Notifier;

/// A landmark together with its resolved country → region → city chain.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedLandmark {
    pub details: LandmarkDetails,
    pub selection: LocationSelection,
}

/// Fetches a landmark and the city it belongs to.
///
/// The landmark only names its city; the city supplies the country and region,
/// so the form's selection can be set in one step.
pub struct LandmarkFormLoader {
    landmarks: Arc<dyn EntityRepository<Landmarks>>,
    cities: Arc<dyn EntityRepository<Cities>>,
    notifier: Arc<dyn Notifier>,
}

impl LandmarkFormLoader {
    #[must_use]
    pub fn new(
        landmarks: Arc<dyn EntityRepository<Landmarks>>,
        cities: Arc<dyn EntityRepository<Cities>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            landmarks,
            cities,
            notifier,
        }
    }

    pub async fn load(&self, id: GeoId) -> CoreResult<LoadedLandmark> {
        let result = async {
            let details = self.landmarks.get(id).await?;
            let city = self.cities.get(details.city_id).await?;
            let selection = LocationSelection::resolved(
                Some(city.country_id),
                city.region_id,
                Some(details.city_id),
            );
            Ok::<_, CoreError>(LoadedLandmark { details, selection })
        }
        .await;

        result.map_err(|e| {
            if e.is_expected() {
                log::warn!("Failed to open landmark {id} for editing: {e}");
            } else {
                log::error!("Failed to open landmark {id} for editing: {e}");
            }
            self.notifier.error(&e.user_message());
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::LocationCascade;
    use crate::test_utils::{
        city_details, landmark_details, notifier, options, GatedLocationSource, MockRepository,
        Scope,
    };

    #[tokio::test]
    async fn chain_is_resolved_from_the_city() {
        let landmarks = Arc::new(MockRepository::<Landmarks>::new(Vec::new()));
        landmarks.set_details(GeoId(7), landmark_details(7, 30, "Wawel")).await;
        let cities = Arc::new(MockRepository::<Cities>::new(Vec::new()));
        cities
            .set_details(GeoId(30), city_details(30, 1, Some(20), "Krakow"))
            .await;
        let (recording, notifier) = notifier();
        let loader = LandmarkFormLoader::new(landmarks, cities, notifier.clone());

        let loaded = loader.load(GeoId(7)).await.unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(loaded.selection.country_id, Some(GeoId(1)));
        assert_eq!(loaded.selection.region_id, Some(GeoId(20)));
        assert_eq!(loaded.selection.city_id, Some(GeoId(30)));
        assert!(recording.messages().is_empty());

        // Loading both tiers for the resolved chain keeps the selection intact.
        let source = Arc::new(GatedLocationSource::new());
        let cascade = LocationCascade::new(source.clone(), notifier);
        cascade.country_changed(&loaded.selection).await;
        assert_eq!(
            source.calls(),
            vec![
                Scope::Regions(GeoId(1)),
                Scope::Cities(GeoId(1), Some(GeoId(20)))
            ]
        );
        assert_eq!(options(&[]), cascade.snapshot().cities.options);
    }

    #[tokio::test]
    async fn missing_city_is_reported() {
        let landmarks = Arc::new(MockRepository::<Landmarks>::new(Vec::new()));
        landmarks.set_details(GeoId(7), landmark_details(7, 30, "Wawel")).await;
        let cities = Arc::new(MockRepository::<Cities>::new(Vec::new()));
        let (recording, notifier) = notifier();
        let loader = LandmarkFormLoader::new(landmarks, cities, notifier);

        assert!(loader.load(GeoId(7)).await.is_err());
        assert_eq!(recording.messages().len(), 1);
    }
}

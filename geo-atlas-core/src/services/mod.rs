//! View models and the services behind them

mod collection_view;
mod entity_service;
mod landmark_detail_view;
mod landmark_form_loader;
mod location_source;

pub use collection_view::{CollectionSnapshot, CollectionView};
pub use entity_service::EntityService;
pub use landmark_detail_view::{DetailState, LandmarkDetailView};
pub use landmark_form_loader::{LandmarkFormLoader, LoadedLandmark};
pub use location_source::RemoteLocationSource;

use std::sync::Arc;

use futures::future::BoxFuture;
use geo_atlas_client::{
    Cities, Countries, Entity, EntityRepository, GeoApiClient, LandmarkImageStore, Landmarks,
    Regions,
};

use crate::config::ApiConfig;
use crate::error::CoreResult;
use crate::selection::LocationCascade;
use crate::traits::{LocationSource, Notifier};

/// Deferred view update. Nothing happens until it is spawned or awaited.
pub type ViewTask = BoxFuture<'static, ()>;

/// Service context - holds all dependencies
///
/// The shell creates this context and injects its notifier.
#[derive(Clone)]
pub struct ServiceContext {
    /// API origin and URL resolution
    pub config: ApiConfig,
    pub countries: Arc<dyn EntityRepository<Countries>>,
    pub regions: Arc<dyn EntityRepository<Regions>>,
    pub cities: Arc<dyn EntityRepository<Cities>>,
    pub landmarks: Arc<dyn EntityRepository<Landmarks>>,
    pub images: Arc<dyn LandmarkImageStore>,
    /// User-facing notifications
    pub notifier: Arc<dyn Notifier>,
}

impl ServiceContext {
    /// Wires every repository to one HTTP client.
    pub fn connect(config: ApiConfig, notifier: Arc<dyn Notifier>) -> CoreResult<Self> {
        let client = Arc::new(GeoApiClient::new(config.origin())?);
        log::info!("Using API at {}", config.origin());
        Ok(Self {
            config,
            countries: client.clone(),
            regions: client.clone(),
            cities: client.clone(),
            landmarks: client.clone(),
            images: client,
            notifier,
        })
    }

    /// A fresh cascade over the remote location lists.
    pub fn location_cascade(&self) -> LocationCascade {
        let source: Arc<dyn LocationSource> = Arc::new(RemoteLocationSource::new(
            Arc::clone(&self.countries),
            Arc::clone(&self.regions),
            Arc::clone(&self.cities),
        ));
        LocationCascade::new(source, Arc::clone(&self.notifier))
    }

    /// Create/update/delete helper for one collection.
    pub fn entity_service<E: Entity>(&self, repository: &Arc<dyn EntityRepository<E>>) -> EntityService<E> {
        EntityService::new(Arc::clone(repository), Arc::clone(&self.notifier))
    }

    /// List view for one collection.
    pub fn collection_view<E: Entity>(
        &self,
        repository: &Arc<dyn EntityRepository<E>>,
        query: E::Query,
    ) -> CollectionView<E> {
        CollectionView::new(Arc::clone(repository), Arc::clone(&self.notifier), query)
    }

    /// Detail page model for one landmark.
    pub fn landmark_detail(&self, id: geo_atlas_client::GeoId) -> LandmarkDetailView {
        LandmarkDetailView::new(
            id,
            Arc::clone(&self.landmarks),
            Arc::clone(&self.images),
            Arc::clone(&self.notifier),
        )
    }

    pub fn landmark_form_loader(&self) -> LandmarkFormLoader {
        LandmarkFormLoader::new(
            Arc::clone(&self.landmarks),
            Arc::clone(&self.cities),
            Arc::clone(&self.notifier),
        )
    }
}

//! Landmark detail page model with the image panel actions

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::BoxFuture;
use futures::FutureExt;
use geo_atlas_client::{
    EntityRepository, GeoId, ImageUpload, LandmarkDetails, LandmarkImageStore, Landmarks,
};

use super::ViewTask;
use crate::error::{CoreError, CoreResult};
use crate::selection::RequestGate;
use crate::traits::Notifier;

/// What the detail page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Box<LandmarkDetails>),
    /// The API answered 404.
    NotFound,
    /// The first load failed for another reason; the error was already toasted.
    Unavailable,
}

struct DetailInner {
    id: GeoId,
    landmarks: Arc<dyn EntityRepository<Landmarks>>,
    images: Arc<dyn LandmarkImageStore>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<(DetailState, RequestGate)>,
}

impl DetailInner {
    fn lock(&self) -> MutexGuard<'_, (DetailState, RequestGate)> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn report(&self, action: &str, error: CoreError) -> CoreError {
        if error.is_expected() {
            log::warn!("Failed to {action} for landmark {}: {error}", self.id);
        } else {
            log::error!("Failed to {action} for landmark {}: {error}", self.id);
        }
        self.notifier.error(&error.user_message());
        error
    }

    async fn refresh(&self) -> CoreResult<()> {
        let details = self.landmarks.get(self.id).await?;
        let mut state = self.lock();
        state.1.supersede();
        state.0 = DetailState::Loaded(Box::new(details));
        Ok(())
    }

    /// Reloads after a finished image action. A failure here is reported on its own
    /// and leaves the page showing the previous details.
    async fn refresh_after_image_change(&self) {
        if let Err(e) = self.refresh().await {
            self.report("reload details", e);
        }
    }
}

/// One landmark, loaded by id.
#[derive(Clone)]
pub struct LandmarkDetailView {
    inner: Arc<DetailInner>,
}

impl LandmarkDetailView {
    pub fn new(
        id: GeoId,
        landmarks: Arc<dyn EntityRepository<Landmarks>>,
        images: Arc<dyn LandmarkImageStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            inner: Arc::new(DetailInner {
                id,
                landmarks,
                images,
                notifier,
                state: Mutex::new((DetailState::Loading, RequestGate::default())),
            }),
        }
    }

    pub fn id(&self) -> GeoId {
        self.inner.id
    }

    pub fn state(&self) -> DetailState {
        self.inner.lock().0.clone()
    }

    /// Fetches the landmark. A 404 shows the not-found page without a toast.
    pub fn load(&self) -> ViewTask {
        let ticket = {
            let mut state = self.inner.lock();
            if !matches!(state.0, DetailState::Loaded(_)) {
                state.0 = DetailState::Loading;
            }
            state.1.issue()
        };
        let inner = Arc::clone(&self.inner);
        async move {
            let result = inner.landmarks.get(inner.id).await;
            let mut state = inner.lock();
            if !state.1.is_current(ticket) {
                return;
            }
            match result {
                Ok(details) => state.0 = DetailState::Loaded(Box::new(details)),
                Err(e) if e.is_not_found() => {
                    log::warn!("Landmark {} not found", inner.id);
                    state.0 = DetailState::NotFound;
                }
                Err(e) => {
                    if !matches!(state.0, DetailState::Loaded(_)) {
                        state.0 = DetailState::Unavailable;
                    }
                    drop(state);
                    inner.report("load details", e.into());
                }
            }
        }
        .boxed()
    }

    /// Uploads an image, then reloads the details to pick up the new image URL.
    ///
    /// Succeeds once the upload does, even if the reload afterwards fails.
    pub fn upload_image(&self, image: ImageUpload) -> BoxFuture<'static, CoreResult<()>> {
        let inner = Arc::clone(&self.inner);
        async move {
            ensure_loaded(&inner)?;
            let file_name = image.file_name.clone();
            inner
                .images
                .upload_image(inner.id, image)
                .await
                .map_err(|e| inner.report("upload image", e.into()))?;
            log::info!("Uploaded {file_name} for landmark {}", inner.id);
            inner.notifier.success("Image uploaded successfully");
            inner.refresh_after_image_change().await;
            Ok(())
        }
        .boxed()
    }

    /// Removes the image, then reloads the details.
    pub fn delete_image(&self) -> BoxFuture<'static, CoreResult<()>> {
        let inner = Arc::clone(&self.inner);
        async move {
            ensure_loaded(&inner)?;
            inner
                .images
                .delete_image(inner.id)
                .await
                .map_err(|e| inner.report("delete image", e.into()))?;
            log::info!("Deleted image of landmark {}", inner.id);
            inner.notifier.success("Image deleted successfully");
            inner.refresh_after_image_change().await;
            Ok(())
        }
        .boxed()
    }
}

fn ensure_loaded(inner: &DetailInner) -> CoreResult<()> {
    if matches!(inner.lock().0, DetailState::Loaded(_)) {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Landmark".to_string(),
            id: inner.id.get(),
        })
    }
}

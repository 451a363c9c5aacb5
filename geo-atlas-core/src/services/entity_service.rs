//! Create, update and fetch with user feedback

use std::sync::Arc;

use geo_atlas_client::{Entity, EntityRepository, GeoId};

use crate::error::{CoreError, CoreResult};
use crate::traits::Notifier;

/// Wraps a repository with success and error toasts.
///
/// Errors are reported to the notifier *and* returned, so a form dialog can stay open.
pub struct EntityService<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
    notifier: Arc<dyn Notifier>,
}

impl<E: Entity> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<E: Entity> EntityService<E> {
    #[must_use]
    pub fn new(repository: Arc<dyn EntityRepository<E>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Fetches one entity, e.g. before opening the edit dialog.
    pub async fn get(&self, id: GeoId) -> CoreResult<E::Details> {
        self.repository
            .get(id)
            .await
            .map_err(|e| self.report(&format!("load {} {id}", E::NAME), e.into()))
    }

    /// Updates `existing_id` when given, otherwise creates.
    ///
    /// Returns the entity as the server stored it.
    pub async fn save(
        &self,
        existing_id: Option<GeoId>,
        request: &E::Request,
    ) -> CoreResult<E::Details> {
        let saved = match existing_id {
            Some(id) => {
                let updated = self
                    .repository
                    .update(id, request)
                    .await
                    .map_err(|e| self.report(&format!("update {} {id}", E::NAME), e.into()))?;
                log::info!("{} {id} updated", E::NAME);
                self.notifier
                    .success(&format!("{} updated successfully", E::NAME));
                updated
            }
            None => {
                let created = self
                    .repository
                    .create(request)
                    .await
                    .map_err(|e| self.report(&format!("create {}", E::NAME), e.into()))?;
                log::info!("{} created: {created:?}", E::NAME);
                self.notifier
                    .success(&format!("{} created successfully", E::NAME));
                created
            }
        };
        Ok(saved)
    }

    fn report(&self, action: &str, error: CoreError) -> CoreError {
        if error.is_expected() {
            log::warn!("Failed to {action}: {error}");
        } else {
            log::error!("Failed to {action}: {error}");
        }
        self.notifier.error(&error.user_message());
        error
    }
}

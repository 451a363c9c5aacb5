//! List page model with filter query and delete confirmation

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future;
use futures::FutureExt;
use geo_atlas_client::{Entity, EntityRepository, GeoId};

use super::ViewTask;
use crate::error::CoreError;
use crate::selection::RequestGate;
use crate::traits::Notifier;

/// Copy of the list state for rendering.
#[derive(Debug, Clone)]
pub struct CollectionSnapshot<E: Entity> {
    pub query: E::Query,
    pub rows: Vec<E::ListItem>,
    pub loading: bool,
    /// Row awaiting delete confirmation.
    pub pending_delete: Option<GeoId>,
}

struct CollectionState<E: Entity> {
    query: E::Query,
    rows: Vec<E::ListItem>,
    loading: bool,
    pending_delete: Option<GeoId>,
    gate: RequestGate,
}

struct Inner<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<CollectionState<E>>,
}

impl<E: Entity> Inner<E> {
    fn lock(&self) -> MutexGuard<'_, CollectionState<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Rows of one collection under the current filter query.
///
/// Reloads follow the same rule as the location cascade: only the most recent
/// request may replace the rows.
pub struct CollectionView<E: Entity> {
    inner: Arc<Inner<E>>,
}

impl<E: Entity> Clone for CollectionView<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Entity> CollectionView<E> {
    pub fn new(
        repository: Arc<dyn EntityRepository<E>>,
        notifier: Arc<dyn Notifier>,
        query: E::Query,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                repository,
                notifier,
                state: Mutex::new(CollectionState {
                    query,
                    rows: Vec::new(),
                    loading: false,
                    pending_delete: None,
                    gate: RequestGate::default(),
                }),
            }),
        }
    }

    pub fn snapshot(&self) -> CollectionSnapshot<E> {
        let state = self.inner.lock();
        CollectionSnapshot {
            query: state.query.clone(),
            rows: state.rows.clone(),
            loading: state.loading,
            pending_delete: state.pending_delete,
        }
    }

    pub fn query(&self) -> E::Query {
        self.inner.lock().query.clone()
    }

    /// Replaces the filter query and reloads when it changed.
    pub fn set_query(&self, query: E::Query) -> ViewTask {
        {
            let mut state = self.inner.lock();
            if state.query == query {
                return future::ready(()).boxed();
            }
            state.query = query;
        }
        self.reload()
    }

    /// Fetches the rows for the current query. Failures keep the previous rows.
    pub fn reload(&self) -> ViewTask {
        let (ticket, query) = {
            let mut state = self.inner.lock();
            state.loading = true;
            (state.gate.issue(), state.query.clone())
        };
        let inner = Arc::clone(&self.inner);
        async move {
            let result = inner.repository.list(&query).await;
            let mut state = inner.lock();
            if !state.gate.is_current(ticket) {
                log::debug!("Discarding stale {} list", E::NAME);
                return;
            }
            state.loading = false;
            match result {
                Ok(rows) => state.rows = rows,
                Err(e) => {
                    drop(state);
                    report(&*inner.notifier, &format!("list {}", E::PATH), e.into());
                }
            }
        }
        .boxed()
    }

    /// Opens the delete confirmation for a row.
    pub fn request_delete(&self, id: GeoId) {
        self.inner.lock().pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<GeoId> {
        self.inner.lock().pending_delete
    }

    /// Closes the confirmation without touching the rows.
    pub fn cancel_delete(&self) {
        self.inner.lock().pending_delete = None;
    }

    /// Deletes the pending row, then reloads. The confirmation closes either way.
    pub fn confirm_delete(&self) -> ViewTask {
        let Some(id) = self.inner.lock().pending_delete.take() else {
            return future::ready(()).boxed();
        };
        let view = self.clone();
        async move {
            match view.inner.repository.delete(id).await {
                Ok(()) => {
                    log::info!("{} {id} deleted", E::NAME);
                    view.inner
                        .notifier
                        .success(&format!("{} deleted successfully", E::NAME));
                    view.reload().await;
                }
                Err(e) => report(
                    &*view.inner.notifier,
                    &format!("delete {} {id}", E::NAME),
                    e.into(),
                ),
            }
        }
        .boxed()
    }
}

fn report(notifier: &dyn Notifier, action: &str, error: CoreError) {
    if error.is_expected() {
        log::warn!("Failed to {action}: {error}");
    } else {
        log::error!("Failed to {action}: {error}");
    }
    notifier.error(&error.user_message());
}

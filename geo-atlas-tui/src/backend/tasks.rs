use std::future::Future;

use futures::future::BoxFuture;
use geo_atlas_client::{CityDetails, CountryDetails, GeoId, RegionDetails};
use geo_atlas_core::services::LoadedLandmark;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// The four managed collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Country,
    Region,
    City,
    Landmark,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Region => "Region",
            Self::City => "City",
            Self::Landmark => "Landmark",
        }
    }
}

/// Entity fetched for an edit dialog.
#[derive(Debug)]
pub enum EditPayload {
    Country(GeoId, CountryDetails),
    Region(GeoId, RegionDetails),
    City(GeoId, CityDetails),
    Landmark(GeoId, LoadedLandmark),
}

/// Outcome of a background operation that the update layer reacts to.
///
/// Plain list and option loads need no event: their view models update shared
/// state that the next frame reads.
#[derive(Debug)]
pub enum BackendEvent {
    /// Data for an edit dialog arrived.
    EditLoaded(Box<EditPayload>),
    /// A dialog saved successfully.
    Saved(EntityKind),
    /// Saving failed; the dialog stays open with this message.
    SaveFailed(String),
    /// An image upload or removal finished.
    ImageFinished { ok: bool },
}

/// Spawns view-model futures on the runtime.
#[derive(Clone)]
pub struct TaskRunner {
    handle: Handle,
    events: UnboundedSender<BackendEvent>,
}

impl TaskRunner {
    pub fn new(handle: Handle) -> (Self, UnboundedReceiver<BackendEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (Self { handle, events }, rx)
    }

    /// Drives a future whose effects land in shared view-model state.
    pub fn spawn(&self, task: BoxFuture<'static, ()>) {
        self.handle.spawn(task);
    }

    /// Drives a future and hands its outcome to the update layer.
    pub fn spawn_reply<F>(&self, task: F)
    where
        F: Future<Output = Option<BackendEvent>> + Send + 'static,
    {
        let events = self.events.clone();
        self.handle.spawn(async move {
            if let Some(event) = task.await {
                if events.send(event).is_err() {
                    log::debug!("UI loop gone, dropping backend event");
                }
            }
        });
    }
}

//! Test helper module
//!
//! Provides mock implementations and convenient factories for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use geo_atlas_client::{
    CityDetails, CityListItem, CountryListItem, Entity, EntityRepository, GeoId, ImageUpload,
    LandmarkDetails, LandmarkImageStore, LandmarkListItem, RegionListItem, RemoteError,
};
use tokio::sync::{oneshot, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::traits::{LocationSource, Notifier};
use crate::types::{GeoOption, Notification, Severity};

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Builds options from `(id, name)` pairs.
pub fn options(items: &[(i64, &str)]) -> Vec<GeoOption> {
    items
        .iter()
        .map(|&(id, name)| GeoOption::new(GeoId(id), name))
        .collect()
}

// ===== RecordingNotifier =====

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        lock(&self.notifications)
            .iter()
            .map(|n| (n.severity, n.message.clone()))
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        lock(&self.notifications).push(notification);
    }
}

// ===== GatedLocationSource =====

/// Request scope seen by [`GatedLocationSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Countries,
    Regions(GeoId),
    Cities(GeoId, Option<GeoId>),
}

type Reply = CoreResult<Vec<GeoOption>>;

/// Location source whose answers are released by the test.
///
/// A scope with a registered gate waits until the test sends its result; a scope
/// marked as failing answers with an error; anything else answers with no options.
#[derive(Default)]
pub struct GatedLocationSource {
    gates: Mutex<HashMap<Scope, oneshot::Receiver<Reply>>>,
    failures: Mutex<HashMap<Scope, String>>,
    calls: Mutex<Vec<Scope>>,
}

impl GatedLocationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds the next request for `scope` until the returned sender fires.
    pub fn gate(&self, scope: Scope) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        lock(&self.gates).insert(scope, rx);
        tx
    }

    /// Makes requests for `scope` fail with a server error.
    pub fn fail(&self, scope: Scope, message: &str) {
        lock(&self.failures).insert(scope, message.to_string());
    }

    /// Requests actually sent, in order.
    pub fn calls(&self) -> Vec<Scope> {
        lock(&self.calls).clone()
    }

    async fn answer(&self, scope: Scope) -> Reply {
        lock(&self.calls).push(scope);
        if let Some(message) = lock(&self.failures).get(&scope).cloned() {
            return Err(RemoteError::from_status(500, message).into());
        }
        let gate = lock(&self.gates).remove(&scope);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(CoreError::Io("gate dropped".into()))),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl LocationSource for GatedLocationSource {
    async fn list_countries(&self) -> CoreResult<Vec<GeoOption>> {
        self.answer(Scope::Countries).await
    }

    async fn list_regions(&self, country_id: GeoId) -> CoreResult<Vec<GeoOption>> {
        self.answer(Scope::Regions(country_id)).await
    }

    async fn list_cities(
        &self,
        country_id: GeoId,
        region_id: Option<GeoId>,
    ) -> CoreResult<Vec<GeoOption>> {
        self.answer(Scope::Cities(country_id, region_id)).await
    }
}

// ===== MockRepository =====

/// Rows that expose their id, so the mock can delete them.
pub trait Identified {
    fn id(&self) -> GeoId;
}

impl Identified for CountryListItem {
    fn id(&self) -> GeoId {
        self.id
    }
}

impl Identified for RegionListItem {
    fn id(&self) -> GeoId {
        self.id
    }
}

impl Identified for CityListItem {
    fn id(&self) -> GeoId {
        self.id
    }
}

impl Identified for LandmarkListItem {
    fn id(&self) -> GeoId {
        self.id
    }
}

/// Repository operation seen by [`MockRepository`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    List,
    Get(GeoId),
    Create,
    Update(GeoId),
    Delete(GeoId),
    UploadImage(GeoId),
    DeleteImage(GeoId),
}

pub struct MockRepository<E: Entity> {
    rows: RwLock<Vec<E::ListItem>>,
    details: RwLock<HashMap<GeoId, E::Details>>,
    created: RwLock<Option<E::Details>>,
    /// If Some, the next operation fails with this error.
    next_error: RwLock<Option<RemoteError>>,
    /// If Some, the next matching operation fails with this error.
    call_error: RwLock<Option<(Call, RemoteError)>>,
    calls: RwLock<Vec<Call>>,
}

impl<E: Entity> MockRepository<E>
where
    E::ListItem: Identified,
{
    pub fn new(rows: Vec<E::ListItem>) -> Self {
        Self {
            rows: RwLock::new(rows),
            details: RwLock::new(HashMap::new()),
            created: RwLock::new(None),
            next_error: RwLock::new(None),
            call_error: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_details(&self, id: GeoId, details: E::Details) {
        self.details.write().await.insert(id, details);
    }

    pub async fn set_created(&self, details: E::Details) {
        *self.created.write().await = Some(details);
    }

    pub async fn fail_next(&self, error: RemoteError) {
        *self.next_error.write().await = Some(error);
    }

    /// Fails the next `call` only, letting earlier operations through.
    pub async fn fail_on(&self, call: Call, error: RemoteError) {
        *self.call_error.write().await = Some((call, error));
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.read().await.clone()
    }

    pub async fn row_ids(&self) -> Vec<GeoId> {
        self.rows.read().await.iter().map(Identified::id).collect()
    }

    async fn record(&self, call: Call) -> Result<(), RemoteError> {
        self.calls.write().await.push(call);
        {
            let mut call_error = self.call_error.write().await;
            if call_error.as_ref().is_some_and(|(expected, _)| *expected == call) {
                if let Some((_, e)) = call_error.take() {
                    return Err(e);
                }
            }
        }
        match self.next_error.write().await.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for MockRepository<E>
where
    E::ListItem: Identified,
{
    async fn list(&self, _query: &E::Query) -> geo_atlas_client::Result<Vec<E::ListItem>> {
        self.record(Call::List).await?;
        Ok(self.rows.read().await.clone())
    }

    async fn get(&self, id: GeoId) -> geo_atlas_client::Result<E::Details> {
        self.record(Call::Get(id)).await?;
        self.details
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| RemoteError::from_status(404, "Request failed with status code 404"))
    }

    async fn create(&self, _request: &E::Request) -> geo_atlas_client::Result<E::Details> {
        self.record(Call::Create).await?;
        self.created
            .read()
            .await
            .clone()
            .ok_or_else(|| RemoteError::from_status(500, "no create fixture"))
    }

    async fn update(
        &self,
        id: GeoId,
        _request: &E::Request,
    ) -> geo_atlas_client::Result<E::Details> {
        self.record(Call::Update(id)).await?;
        self.details
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| RemoteError::from_status(404, "Request failed with status code 404"))
    }

    async fn delete(&self, id: GeoId) -> geo_atlas_client::Result<()> {
        self.record(Call::Delete(id)).await?;
        self.rows.write().await.retain(|row| row.id() != id);
        Ok(())
    }
}

#[async_trait]
impl LandmarkImageStore for MockRepository<geo_atlas_client::Landmarks> {
    async fn upload_image(&self, landmark_id: GeoId, image: ImageUpload) -> geo_atlas_client::Result<()> {
        self.record(Call::UploadImage(landmark_id)).await?;
        if let Some(details) = self.details.write().await.get_mut(&landmark_id) {
            details.image_url = Some(format!("/uploads/{}", image.file_name));
        }
        Ok(())
    }

    async fn delete_image(&self, landmark_id: GeoId) -> geo_atlas_client::Result<()> {
        self.record(Call::DeleteImage(landmark_id)).await?;
        if let Some(details) = self.details.write().await.get_mut(&landmark_id) {
            details.image_url = None;
        }
        Ok(())
    }
}

// ===== Fixtures =====

pub fn country(id: i64, name: &str, code: &str) -> CountryListItem {
    CountryListItem {
        id: GeoId(id),
        name: name.to_string(),
        code: code.to_string(),
    }
}

pub fn city_details(id: i64, country_id: i64, region_id: Option<i64>, name: &str) -> CityDetails {
    CityDetails {
        id: GeoId(id),
        country_id: GeoId(country_id),
        country_name: String::new(),
        region_id: region_id.map(GeoId),
        region_name: None,
        name: name.to_string(),
        latitude: None,
        longitude: None,
    }
}

pub fn landmark_details(id: i64, city_id: i64, name: &str) -> LandmarkDetails {
    LandmarkDetails {
        id: GeoId(id),
        city_id: GeoId(city_id),
        city_name: String::new(),
        region_id: None,
        region_name: None,
        country_id: GeoId(0),
        country_name: String::new(),
        name: name.to_string(),
        description: None,
        address: None,
        latitude: None,
        longitude: None,
        first_mention_year: None,
        protection_status: 0,
        physical_condition: 0,
        accessibility_status: 0,
        external_registry_url: None,
        uploaded_image_path: None,
        image_url: None,
    }
}

/// Shorthand for a shared notifier and its trait-object view.
pub fn notifier() -> (Arc<RecordingNotifier>, Arc<dyn Notifier>) {
    let recording = Arc::new(RecordingNotifier::new());
    let dyn_notifier: Arc<dyn Notifier> = recording.clone();
    (recording, dyn_notifier)
}

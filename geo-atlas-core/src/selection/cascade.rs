use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use geo_atlas_client::GeoId;

use super::state::LocationSelection;
use super::ticket::RequestGate;
use crate::error::CoreResult;
use crate::traits::{LocationSource, Notifier};
use crate::types::GeoOption;

/// Deferred option load returned by the scope setters.
///
/// The request is tagged when the setter is called; it is sent when the future is
/// first polled. A future that is never driven leaves its tier marked as loading,
/// so callers must spawn or await it.
pub type TierLoad = BoxFuture<'static, ()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Country,
    Region,
    City,
}

impl Tier {
    fn label(self) -> &'static str {
        match self {
            Self::Country => "countries",
            Self::Region => "regions",
            Self::City => "cities",
        }
    }
}

#[derive(Debug, Default)]
struct TierState {
    options: Vec<GeoOption>,
    loading: bool,
    gate: RequestGate,
}

impl TierState {
    fn snapshot(&self) -> TierSnapshot {
        TierSnapshot {
            options: self.options.clone(),
            loading: self.loading,
        }
    }
}

#[derive(Debug, Default)]
struct CascadeState {
    countries: TierState,
    regions: TierState,
    cities: TierState,
}

impl CascadeState {
    fn tier_mut(&mut self, tier: Tier) -> &mut TierState {
        match tier {
            Tier::Country => &mut self.countries,
            Tier::Region => &mut self.regions,
            Tier::City => &mut self.cities,
        }
    }
}

/// Option list and loading flag of one tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierSnapshot {
    pub options: Vec<GeoOption>,
    pub loading: bool,
}

impl TierSnapshot {
    /// Finds the option with the given id.
    pub fn find(&self, id: Option<GeoId>) -> Option<&GeoOption> {
        let id = id?;
        self.options.iter().find(|o| o.id == id)
    }
}

/// Point-in-time copy of the three tiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CascadeSnapshot {
    pub countries: TierSnapshot,
    pub regions: TierSnapshot,
    pub cities: TierSnapshot,
}

impl CascadeSnapshot {
    pub fn country_selectable(&self) -> bool {
        !self.countries.loading
    }

    /// A region can be picked once a country is selected and its regions have arrived.
    pub fn region_selectable(&self, selection: &LocationSelection) -> bool {
        selection.country_id.is_some() && !self.regions.loading
    }

    /// A city can be picked once a country is selected and its cities have arrived.
    pub fn city_selectable(&self, selection: &LocationSelection) -> bool {
        selection.country_id.is_some() && !self.cities.loading
    }
}

struct Inner {
    source: Arc<dyn LocationSource>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<CascadeState>,
    initialized: AtomicBool,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, CascadeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn commit(&self, tier: Tier, ticket: u64, result: CoreResult<Vec<GeoOption>>) {
        let mut state = self.lock();
        let slot = state.tier_mut(tier);
        if !slot.gate.is_current(ticket) {
            match &result {
                Ok(options) => log::debug!(
                    "Discarding stale {} result ({} options)",
                    tier.label(),
                    options.len()
                ),
                Err(e) => log::debug!("Discarding stale {} failure: {e}", tier.label()),
            }
            return;
        }

        slot.loading = false;
        match result {
            Ok(options) => {
                slot.options = options;
            }
            Err(e) => {
                slot.options.clear();
                drop(state);
                if e.is_expected() {
                    log::warn!("Failed to load {}: {e}", tier.label());
                } else {
                    log::error!("Failed to load {}: {e}", tier.label());
                }
                self.notifier.error(&e.user_message());
            }
        }
    }
}

/// Shared handle to the country, region and city option lists.
///
/// Each tier only ever shows the result of its most recent request: a response
/// that arrives after a newer request (or a clear) for the same tier is dropped.
#[derive(Clone)]
pub struct LocationCascade {
    inner: Arc<Inner>,
}

impl LocationCascade {
    pub fn new(source: Arc<dyn LocationSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                notifier,
                state: Mutex::new(CascadeState::default()),
                initialized: AtomicBool::new(false),
            }),
        }
    }

    /// Loads the country list. Only the first call does anything.
    pub fn initialize(&self) -> TierLoad {
        if self.inner.initialized.swap(true, Ordering::SeqCst) {
            return future::ready(()).boxed();
        }
        let source = Arc::clone(&self.inner.source);
        self.load(Tier::Country, async move { source.list_countries().await })
    }

    /// Scopes the region list to a country. `None` clears it without a request.
    pub fn set_region_scope(&self, country_id: Option<GeoId>) -> TierLoad {
        let Some(country_id) = GeoId::non_zero(country_id) else {
            self.clear(Tier::Region);
            return future::ready(()).boxed();
        };
        let source = Arc::clone(&self.inner.source);
        self.load(Tier::Region, async move {
            source.list_regions(country_id).await
        })
    }

    /// Scopes the city list to a country and optional region. A missing country
    /// clears it without a request.
    pub fn set_city_scope(&self, country_id: Option<GeoId>, region_id: Option<GeoId>) -> TierLoad {
        let Some(country_id) = GeoId::non_zero(country_id) else {
            self.clear(Tier::City);
            return future::ready(()).boxed();
        };
        let region_id = GeoId::non_zero(region_id);
        let source = Arc::clone(&self.inner.source);
        self.load(Tier::City, async move {
            source.list_cities(country_id, region_id).await
        })
    }

    /// Rescopes regions and cities after the selected country changed.
    pub fn country_changed(&self, selection: &LocationSelection) -> TierLoad {
        let regions = self.set_region_scope(selection.country_id);
        let cities = self.set_city_scope(selection.country_id, selection.region_id);
        future::join(regions, cities).map(|_| ()).boxed()
    }

    /// Rescopes cities after the selected region changed.
    pub fn region_changed(&self, selection: &LocationSelection) -> TierLoad {
        self.set_city_scope(selection.country_id, selection.region_id)
    }

    pub fn snapshot(&self) -> CascadeSnapshot {
        let state = self.inner.lock();
        CascadeSnapshot {
            countries: state.countries.snapshot(),
            regions: state.regions.snapshot(),
            cities: state.cities.snapshot(),
        }
    }

    fn clear(&self, tier: Tier) {
        let mut state = self.inner.lock();
        let slot = state.tier_mut(tier);
        slot.gate.supersede();
        slot.options.clear();
        slot.loading = false;
    }

    fn load<F>(&self, tier: Tier, fetch: F) -> TierLoad
    where
        F: future::Future<Output = CoreResult<Vec<GeoOption>>> + Send + 'static,
    {
        let ticket = {
            let mut state = self.inner.lock();
            let slot = state.tier_mut(tier);
            slot.loading = true;
            slot.gate.issue()
        };
        let inner = Arc::clone(&self.inner);
        async move {
            let result = fetch.await;
            inner.commit(tier, ticket, result);
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{options, GatedLocationSource, RecordingNotifier, Scope};
    use crate::types::Severity;

    fn cascade() -> (LocationCascade, Arc<GatedLocationSource>, Arc<RecordingNotifier>) {
        let source = Arc::new(GatedLocationSource::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let cascade = LocationCascade::new(source.clone(), notifier.clone());
        (cascade, source, notifier)
    }

    const PERMUTATIONS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    #[tokio::test]
    async fn region_options_follow_last_scope_in_every_resolution_order() {
        for order in PERMUTATIONS {
            let (cascade, source, notifier) = cascade();
            let senders: Vec<_> = (1..=3)
                .map(|c| source.gate(Scope::Regions(GeoId(c))))
                .collect();
            let mut loads: Vec<Option<TierLoad>> = (1..=3)
                .map(|c| Some(cascade.set_region_scope(Some(GeoId(c)))))
                .collect();
            let mut senders: Vec<_> = senders.into_iter().map(Some).collect();

            for i in order {
                let tx = senders[i].take().unwrap_or_else(|| panic!("gate {i} reused"));
                let _ = tx.send(Ok(options(&[(i64::try_from(i).unwrap_or_default() + 10, "r")])));
                if let Some(load) = loads[i].take() {
                    load.await;
                }
            }

            let snap = cascade.snapshot();
            assert_eq!(
                snap.regions.options.iter().map(|o| o.id).collect::<Vec<_>>(),
                vec![GeoId(12)],
                "order {order:?}"
            );
            assert!(!snap.regions.loading, "order {order:?}");
            assert!(notifier.messages().is_empty());
        }
    }

    #[tokio::test]
    async fn city_options_follow_last_scope_in_every_resolution_order() {
        let scopes = [
            (GeoId(1), None),
            (GeoId(1), Some(GeoId(4))),
            (GeoId(2), None),
        ];
        for order in PERMUTATIONS {
            let (cascade, source, _) = cascade();
            let mut senders: Vec<_> = scopes
                .iter()
                .map(|&(c, r)| Some(source.gate(Scope::Cities(c, r))))
                .collect();
            let mut loads: Vec<Option<TierLoad>> = scopes
                .iter()
                .map(|&(c, r)| Some(cascade.set_city_scope(Some(c), r)))
                .collect();

            for i in order {
                if let Some(tx) = senders[i].take() {
                    let _ = tx.send(Ok(options(&[(100 + i64::try_from(i).unwrap_or_default(), "c")])));
                }
                if let Some(load) = loads[i].take() {
                    load.await;
                }
            }

            let ids: Vec<_> = cascade.snapshot().cities.options.iter().map(|o| o.id).collect();
            assert_eq!(ids, vec![GeoId(102)], "order {order:?}");
        }
    }

    #[tokio::test]
    async fn clearing_scope_issues_no_request_and_empties_options() {
        let (cascade, source, _) = cascade();
        let tx = source.gate(Scope::Regions(GeoId(1)));
        let _ = tx.send(Ok(options(&[(5, "Mazovia")])));
        cascade.set_region_scope(Some(GeoId(1))).await;
        assert_eq!(cascade.snapshot().regions.options.len(), 1);
        assert_eq!(source.calls().len(), 1);

        cascade.set_region_scope(None).await;
        cascade.set_city_scope(None, Some(GeoId(5))).await;
        let snap = cascade.snapshot();
        assert!(snap.regions.options.is_empty());
        assert!(snap.cities.options.is_empty());
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test]
    async fn zero_scope_counts_as_empty() {
        let (cascade, source, _) = cascade();
        cascade.set_region_scope(Some(GeoId(0))).await;
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn non_empty_scope_issues_exactly_one_request() {
        let (cascade, source, _) = cascade();
        let load = cascade.set_region_scope(Some(GeoId(7)));
        assert!(cascade.snapshot().regions.loading);
        load.await;
        assert_eq!(source.calls(), vec![Scope::Regions(GeoId(7))]);
        assert!(!cascade.snapshot().regions.loading);
    }

    #[tokio::test]
    async fn clearing_discards_in_flight_result() {
        let (cascade, source, _) = cascade();
        let tx = source.gate(Scope::Regions(GeoId(1)));
        let load = cascade.set_region_scope(Some(GeoId(1)));
        cascade.set_region_scope(None).await;

        let _ = tx.send(Ok(options(&[(5, "late")])));
        load.await;
        let snap = cascade.snapshot();
        assert!(snap.regions.options.is_empty());
        assert!(!snap.regions.loading);
    }

    #[tokio::test]
    async fn current_failure_clears_options_and_notifies() {
        let (cascade, source, notifier) = cascade();
        let tx = source.gate(Scope::Regions(GeoId(1)));
        let _ = tx.send(Ok(options(&[(5, "Mazovia")])));
        cascade.set_region_scope(Some(GeoId(1))).await;

        source.fail(Scope::Regions(GeoId(2)), "Request failed with status code 500");
        cascade.set_region_scope(Some(GeoId(2))).await;

        let snap = cascade.snapshot();
        assert!(snap.regions.options.is_empty());
        assert!(!snap.regions.loading);
        assert_eq!(
            notifier.messages(),
            vec![(Severity::Error, "Request failed with status code 500".to_string())]
        );
    }

    #[tokio::test]
    async fn stale_failure_is_silent() {
        let (cascade, source, notifier) = cascade();
        source.fail(Scope::Regions(GeoId(1)), "boom");
        let stale = cascade.set_region_scope(Some(GeoId(1)));
        let tx = source.gate(Scope::Regions(GeoId(2)));
        let current = cascade.set_region_scope(Some(GeoId(2)));

        let _ = tx.send(Ok(options(&[(8, "Pomerania")])));
        current.await;
        stale.await;

        assert_eq!(cascade.snapshot().regions.options.len(), 1);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn initialize_loads_countries_once() {
        let (cascade, source, _) = cascade();
        let tx = source.gate(Scope::Countries);
        let _ = tx.send(Ok(vec![GeoOption::new(GeoId(1), "Poland").with_auxiliary("PL")]));
        cascade.initialize().await;
        cascade.initialize().await;

        assert_eq!(source.calls(), vec![Scope::Countries]);
        let snap = cascade.snapshot();
        assert_eq!(snap.countries.options[0].display(), "Poland (PL)");
        assert!(snap.country_selectable());
    }

    #[tokio::test]
    async fn country_change_before_city_load_resolves() {
        let (cascade, source, notifier) = cascade();
        let mut selection = LocationSelection::new();

        // Country 7 with its regions loaded
        let regions_7 = source.gate(Scope::Regions(GeoId(7)));
        let cities_7 = source.gate(Scope::Cities(GeoId(7), None));
        selection.select_country(Some(GeoId(7)));
        let country_load = cascade.country_changed(&selection);
        let _ = regions_7.send(Ok(options(&[(3, "Mazovia"), (4, "Silesia")])));
        let _ = cities_7.send(Ok(options(&[(70, "Warsaw"), (71, "Katowice")])));
        country_load.await;
        assert_eq!(cascade.snapshot().regions.options.len(), 2);

        // Region 3 scopes the pending city load to (7, 3)
        let cities_7_3 = source.gate(Scope::Cities(GeoId(7), Some(GeoId(3))));
        assert!(selection.select_region(Some(GeoId(3))));
        let region_load = cascade.region_changed(&selection);
        assert!(cascade.snapshot().cities.loading);

        // Country 9 arrives before the region 3 cities do
        let regions_9 = source.gate(Scope::Regions(GeoId(9)));
        let cities_9 = source.gate(Scope::Cities(GeoId(9), None));
        assert!(selection.select_country(Some(GeoId(9))));
        let country_9_load = cascade.country_changed(&selection);
        assert!(!cascade.snapshot().region_selectable(&selection));

        let _ = regions_9.send(Ok(options(&[(90, "Bavaria")])));
        let _ = cities_9.send(Ok(options(&[(900, "Munich")])));
        country_9_load.await;

        let _ = cities_7_3.send(Ok(options(&[(70, "Warsaw")])));
        region_load.await;

        assert!(source.calls().contains(&Scope::Cities(GeoId(7), Some(GeoId(3)))));
        let snap = cascade.snapshot();
        assert_eq!(snap.regions.options[0].name, "Bavaria");
        assert_eq!(snap.cities.options.len(), 1);
        assert_eq!(snap.cities.options[0].name, "Munich");
        assert!(!snap.cities.loading);
        assert!(snap.region_selectable(&selection));
        assert!(snap.city_selectable(&selection));
        assert_eq!(selection.region_id, None);
        assert_eq!(selection.city_id, None);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn selectability_follows_loading_flags() {
        let (cascade, source, _) = cascade();
        let mut selection = LocationSelection::new();
        selection.select_country(Some(GeoId(3)));

        let tx = source.gate(Scope::Cities(GeoId(3), None));
        let load = cascade.set_city_scope(selection.country_id, None);
        let snap = cascade.snapshot();
        assert!(!snap.city_selectable(&selection));
        assert!(snap.region_selectable(&selection));

        let _ = tx.send(Ok(Vec::new()));
        load.await;
        assert!(cascade.snapshot().city_selectable(&selection));
    }
}

//! Whole application state

use std::sync::Arc;

use geo_atlas_client::{Cities, Countries, Landmarks, Regions};
use geo_atlas_core::{Notifier, ServiceContext};

use super::state::{
    CollectionPage, DetailPage, FilterState, ListPage, ModalState, SettingsState, Theme,
};
use super::{FocusPanel, NavigationState, Page};
use crate::backend::{
    AppSettings, ConfigService, EntityKind, LocalConfigService, TaskRunner, ToastCenter,
};
use crate::view::theme::set_theme_index;

pub struct App {
    pub should_quit: bool,

    pub focus: FocusPanel,

    pub navigation: NavigationState,

    pub current_page: Page,

    /// Repositories, notifier and view-model factories
    pub services: ServiceContext,
    /// Toasts shown in the status bar
    pub toasts: Arc<ToastCenter>,
    /// Spawns backend work onto the runtime
    pub runner: TaskRunner,

    // === Page state ===
    pub countries: CollectionPage<Countries>,
    pub regions: CollectionPage<Regions>,
    pub cities: CollectionPage<Cities>,
    pub landmarks: CollectionPage<Landmarks>,
    /// Set while a landmark detail page is open
    pub detail: Option<DetailPage>,
    pub settings: SettingsState,

    pub modal: ModalState,

    config: Option<LocalConfigService>,
}

impl App {
    pub fn new(
        services: ServiceContext,
        toasts: Arc<ToastCenter>,
        runner: TaskRunner,
        config: Option<LocalConfigService>,
    ) -> Self {
        let theme = config.as_ref().map_or_else(Theme::default, |service| {
            match service.load() {
                Ok(settings) => settings.theme,
                Err(e) => {
                    log::warn!("Ignoring unreadable settings: {e:#}");
                    Theme::default()
                }
            }
        });
        set_theme_index(theme.index());

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::default(),
            countries: CollectionPage::new(
                services.collection_view(&services.countries, Default::default()),
                FilterState::new(None),
            ),
            regions: CollectionPage::new(
                services.collection_view(&services.regions, Default::default()),
                FilterState::new(Some(services.location_cascade())),
            ),
            cities: CollectionPage::new(
                services.collection_view(&services.cities, Default::default()),
                FilterState::new(Some(services.location_cascade())),
            ),
            landmarks: CollectionPage::new(
                services.collection_view(&services.landmarks, Default::default()),
                FilterState::new(Some(services.location_cascade())),
            ),
            detail: None,
            settings: SettingsState::new(theme),
            modal: ModalState::new(),
            services,
            toasts,
            runner,
            config,
        }
    }

    /// List page of a collection.
    pub fn list_page_for(&self, kind: EntityKind) -> &dyn ListPage {
        match kind {
            EntityKind::Country => &self.countries,
            EntityKind::Region => &self.regions,
            EntityKind::City => &self.cities,
            EntityKind::Landmark => &self.landmarks,
        }
    }

    /// List page currently shown, if the page is a list.
    pub fn list_page(&self) -> Option<&dyn ListPage> {
        page_kind(&self.current_page).map(|kind| self.list_page_for(kind))
    }

    pub fn list_page_mut(&mut self) -> Option<&mut dyn ListPage> {
        let page: &mut dyn ListPage = match page_kind(&self.current_page)? {
            EntityKind::Country => &mut self.countries,
            EntityKind::Region => &mut self.regions,
            EntityKind::City => &mut self.cities,
            EntityKind::Landmark => &mut self.landmarks,
        };
        Some(page)
    }

    /// Applies and persists the theme.
    pub fn save_settings(&self) {
        set_theme_index(self.settings.theme.index());
        let Some(config) = &self.config else {
            return;
        };
        let settings = AppSettings {
            theme: self.settings.theme,
        };
        if let Err(e) = config.save(&settings) {
            log::error!("Failed to save settings: {e:#}");
            self.services.notifier.error("Failed to save settings");
        }
    }
}

/// Collection listed on a page.
pub fn page_kind(page: &Page) -> Option<EntityKind> {
    match page {
        Page::Countries => Some(EntityKind::Country),
        Page::Regions => Some(EntityKind::Region),
        Page::Cities => Some(EntityKind::City),
        Page::Landmarks => Some(EntityKind::Landmark),
        Page::LandmarkDetail { .. } | Page::Settings => None,
    }
}

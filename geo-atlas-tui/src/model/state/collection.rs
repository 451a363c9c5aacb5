use geo_atlas_client::{
    Cities, CityQuery, Countries, CountryQuery, Entity, GeoId, LandmarkQuery, Landmarks, Regions,
    RegionQuery,
};
use geo_atlas_core::forms::non_blank;
use geo_atlas_core::services::CollectionView;
use geo_atlas_core::ViewTask;

use super::cursor::ListCursor;
use super::filter::{FilterField, FilterState};
use crate::backend::EntityKind;

/// A collection shown as a list page.
pub trait PageEntity: Entity {
    const KIND: EntityKind;
    /// Controls of the page's filter dialog, top to bottom.
    const FILTER_FIELDS: &'static [FilterField];

    /// List query for the current filter values.
    fn query(filter: &FilterState) -> Self::Query;

    fn row_id(row: &Self::ListItem) -> GeoId;

    /// Name used in the delete confirmation.
    fn row_label(row: &Self::ListItem) -> String;
}

/// The checkbox is always sent, so an unchecked box asks for live rows only.
fn include_deleted(filter: &FilterState) -> Option<bool> {
    Some(filter.include_deleted)
}

impl PageEntity for Countries {
    const KIND: EntityKind = EntityKind::Country;
    const FILTER_FIELDS: &'static [FilterField] = &[FilterField::IncludeDeleted];

    fn query(filter: &FilterState) -> CountryQuery {
        CountryQuery {
            include_deleted: include_deleted(filter),
        }
    }

    fn row_id(row: &Self::ListItem) -> GeoId {
        row.id
    }

    fn row_label(row: &Self::ListItem) -> String {
        format!("{} ({})", row.name, row.code)
    }
}

impl PageEntity for Regions {
    const KIND: EntityKind = EntityKind::Region;
    const FILTER_FIELDS: &'static [FilterField] =
        &[FilterField::Country, FilterField::IncludeDeleted];

    fn query(filter: &FilterState) -> RegionQuery {
        RegionQuery {
            country_id: filter.selection.country_id,
            include_deleted: include_deleted(filter),
        }
    }

    fn row_id(row: &Self::ListItem) -> GeoId {
        row.id
    }

    fn row_label(row: &Self::ListItem) -> String {
        row.name.clone()
    }
}

impl PageEntity for Cities {
    const KIND: EntityKind = EntityKind::City;
    const FILTER_FIELDS: &'static [FilterField] = &[
        FilterField::Country,
        FilterField::Region,
        FilterField::NameContains,
        FilterField::IncludeDeleted,
    ];

    fn query(filter: &FilterState) -> CityQuery {
        CityQuery {
            country_id: filter.selection.country_id,
            region_id: filter.selection.region_id,
            name_contains: non_blank(&filter.name_contains),
            include_deleted: include_deleted(filter),
        }
    }

    fn row_id(row: &Self::ListItem) -> GeoId {
        row.id
    }

    fn row_label(row: &Self::ListItem) -> String {
        row.name.clone()
    }
}

impl PageEntity for Landmarks {
    const KIND: EntityKind = EntityKind::Landmark;
    const FILTER_FIELDS: &'static [FilterField] = &[
        FilterField::Country,
        FilterField::Region,
        FilterField::City,
        FilterField::NameContains,
        FilterField::ProtectionStatus,
        FilterField::PhysicalCondition,
        FilterField::AccessibilityStatus,
    ];

    fn query(filter: &FilterState) -> LandmarkQuery {
        LandmarkQuery {
            city_id: filter.selection.city_id,
            country_id: filter.selection.country_id,
            region_id: filter.selection.region_id,
            name_contains: non_blank(&filter.name_contains),
            protection_status: filter.protection_status,
            physical_condition: filter.physical_condition,
            accessibility_status: filter.accessibility_status,
        }
    }

    fn row_id(row: &Self::ListItem) -> GeoId {
        row.id
    }

    fn row_label(row: &Self::ListItem) -> String {
        format!("{} ({})", row.name, row.city_name)
    }
}

/// A list page: the collection view, its cursor and its filter.
pub struct CollectionPage<E: PageEntity> {
    pub view: CollectionView<E>,
    pub cursor: ListCursor,
    pub filter: FilterState,
}

impl<E: PageEntity> CollectionPage<E> {
    pub fn new(view: CollectionView<E>, filter: FilterState) -> Self {
        Self {
            view,
            cursor: ListCursor::default(),
            filter,
        }
    }

    pub fn rows(&self) -> Vec<E::ListItem> {
        self.view.snapshot().rows
    }

    pub fn selected_row(&self) -> Option<E::ListItem> {
        let mut rows = self.rows();
        let index = self.cursor.selected(rows.len())?;
        Some(rows.swap_remove(index))
    }
}

/// Type-erased list page, so update code can act on whichever page is current.
pub trait ListPage {
    fn kind(&self) -> EntityKind;
    fn filter_fields(&self) -> &'static [FilterField];
    fn filter(&self) -> &FilterState;
    fn filter_mut(&mut self) -> &mut FilterState;
    fn row_count(&self) -> usize;
    fn cursor_mut(&mut self) -> &mut ListCursor;
    /// Id and label of the highlighted row.
    fn selected(&self) -> Option<(GeoId, String)>;
    fn reload(&self) -> ViewTask;
    /// Pushes the filter values into the list query.
    fn apply_filter(&self) -> ViewTask;
    fn request_delete(&self, id: GeoId);
    fn cancel_delete(&self);
    fn confirm_delete(&self) -> ViewTask;
}

impl<E: PageEntity> ListPage for CollectionPage<E> {
    fn kind(&self) -> EntityKind {
        E::KIND
    }

    fn filter_fields(&self) -> &'static [FilterField] {
        E::FILTER_FIELDS
    }

    fn filter(&self) -> &FilterState {
        &self.filter
    }

    fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    fn row_count(&self) -> usize {
        self.view.snapshot().rows.len()
    }

    fn cursor_mut(&mut self) -> &mut ListCursor {
        &mut self.cursor
    }

    fn selected(&self) -> Option<(GeoId, String)> {
        self.selected_row()
            .map(|row| (E::row_id(&row), E::row_label(&row)))
    }

    fn reload(&self) -> ViewTask {
        self.view.reload()
    }

    fn apply_filter(&self) -> ViewTask {
        self.view.set_query(E::query(&self.filter))
    }

    fn request_delete(&self, id: GeoId) {
        self.view.request_delete(id);
    }

    fn cancel_delete(&self) {
        self.view.cancel_delete();
    }

    fn confirm_delete(&self) -> ViewTask {
        self.view.confirm_delete()
    }
}

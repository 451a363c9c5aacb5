use geo_atlas_client::{AccessibilityStatus, PhysicalCondition, ProtectionStatus};
use geo_atlas_core::selection::CascadeSnapshot;
use geo_atlas_core::utils::labels::format_enum;
use geo_atlas_core::{LocationCascade, LocationSelection, TierLoad};

use super::select::{cycle_option, cycle_optional_code, option_label, FieldKind};

/// One control of a list page's filter dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Country,
    Region,
    City,
    NameContains,
    IncludeDeleted,
    ProtectionStatus,
    PhysicalCondition,
    AccessibilityStatus,
}

impl FilterField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Region => "Region",
            Self::City => "City",
            Self::NameContains => "Name contains",
            Self::IncludeDeleted => "Include deleted",
            Self::ProtectionStatus => "Protection status",
            Self::PhysicalCondition => "Physical condition",
            Self::AccessibilityStatus => "Accessibility",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::NameContains => FieldKind::Text,
            Self::IncludeDeleted => FieldKind::Checkbox,
            _ => FieldKind::Select,
        }
    }
}

/// Filter values of one list page.
///
/// Location filters go through the shared cascade, so any region change, clearing
/// included, also clears the city.
pub struct FilterState {
    pub selection: LocationSelection,
    pub cascade: Option<LocationCascade>,
    pub name_contains: String,
    pub include_deleted: bool,
    pub protection_status: Option<i32>,
    pub physical_condition: Option<i32>,
    pub accessibility_status: Option<i32>,
}

impl FilterState {
    pub fn new(cascade: Option<LocationCascade>) -> Self {
        Self {
            selection: LocationSelection::new(),
            cascade,
            name_contains: String::new(),
            include_deleted: false,
            protection_status: None,
            physical_condition: None,
            accessibility_status: None,
        }
    }

    pub fn snapshot(&self) -> CascadeSnapshot {
        self.cascade
            .as_ref()
            .map(LocationCascade::snapshot)
            .unwrap_or_default()
    }

    /// Whether a select field can be changed right now.
    pub fn selectable(&self, field: FilterField) -> bool {
        let snapshot = self.snapshot();
        match field {
            FilterField::Country => snapshot.country_selectable(),
            FilterField::Region => snapshot.region_selectable(&self.selection),
            FilterField::City => snapshot.city_selectable(&self.selection),
            _ => true,
        }
    }

    /// Moves a select field to its neighbouring option.
    ///
    /// Returns the option load the change requires. Disabled fields do not move.
    pub fn cycle(&mut self, field: FilterField, forward: bool) -> Option<TierLoad> {
        if !self.selectable(field) {
            return None;
        }
        let snapshot = self.snapshot();
        let cascade = self.cascade.as_ref();
        match field {
            FilterField::Country => {
                let next = cycle_option(&snapshot.countries.options, self.selection.country_id, forward);
                if self.selection.select_country(next) {
                    cascade.map(|c| c.country_changed(&self.selection))
                } else {
                    None
                }
            }
            FilterField::Region => {
                let next = cycle_option(&snapshot.regions.options, self.selection.region_id, forward);
                if self.selection.select_region(next) {
                    cascade.map(|c| c.region_changed(&self.selection))
                } else {
                    None
                }
            }
            FilterField::City => {
                let next = cycle_option(&snapshot.cities.options, self.selection.city_id, forward);
                self.selection.select_city(next);
                None
            }
            FilterField::ProtectionStatus => {
                self.protection_status =
                    cycle_optional_code::<ProtectionStatus>(self.protection_status, forward);
                None
            }
            FilterField::PhysicalCondition => {
                self.physical_condition =
                    cycle_optional_code::<PhysicalCondition>(self.physical_condition, forward);
                None
            }
            FilterField::AccessibilityStatus => {
                self.accessibility_status =
                    cycle_optional_code::<AccessibilityStatus>(self.accessibility_status, forward);
                None
            }
            FilterField::NameContains | FilterField::IncludeDeleted => None,
        }
    }

    /// Resets one field. Clearing the country also clears region and city.
    pub fn clear(&mut self, field: FilterField) -> Option<TierLoad> {
        let cascade = self.cascade.as_ref();
        match field {
            FilterField::Country => {
                if self.selection.select_country(None) {
                    cascade.map(|c| c.country_changed(&self.selection))
                } else {
                    None
                }
            }
            FilterField::Region => {
                if self.selection.select_region(None) {
                    cascade.map(|c| c.region_changed(&self.selection))
                } else {
                    None
                }
            }
            FilterField::City => {
                self.selection.select_city(None);
                None
            }
            FilterField::NameContains => {
                self.name_contains.clear();
                None
            }
            FilterField::IncludeDeleted => {
                self.include_deleted = false;
                None
            }
            FilterField::ProtectionStatus => {
                self.protection_status = None;
                None
            }
            FilterField::PhysicalCondition => {
                self.physical_condition = None;
                None
            }
            FilterField::AccessibilityStatus => {
                self.accessibility_status = None;
                None
            }
        }
    }

    /// Current value of a field as shown in the dialog.
    pub fn display(&self, field: FilterField, snapshot: &CascadeSnapshot) -> String {
        match field {
            FilterField::Country => {
                option_label(&snapshot.countries, self.selection.country_id, "All countries")
            }
            FilterField::Region => {
                option_label(&snapshot.regions, self.selection.region_id, "All regions")
            }
            FilterField::City => option_label(&snapshot.cities, self.selection.city_id, "All cities"),
            FilterField::NameContains => self.name_contains.clone(),
            FilterField::IncludeDeleted => checkbox(self.include_deleted),
            FilterField::ProtectionStatus => optional_enum::<ProtectionStatus>(self.protection_status),
            FilterField::PhysicalCondition => {
                optional_enum::<PhysicalCondition>(self.physical_condition)
            }
            FilterField::AccessibilityStatus => {
                optional_enum::<AccessibilityStatus>(self.accessibility_status)
            }
        }
    }

    /// One-line summary of the active filters for the page header.
    pub fn summary(&self, fields: &[FilterField]) -> Option<String> {
        let snapshot = self.snapshot();
        let parts: Vec<String> = fields
            .iter()
            .filter(|&&field| self.is_set(field))
            .map(|&field| format!("{}: {}", field.label(), self.display(field, &snapshot)))
            .collect();
        (!parts.is_empty()).then(|| parts.join(" · "))
    }

    fn is_set(&self, field: FilterField) -> bool {
        match field {
            FilterField::Country => self.selection.country_id.is_some(),
            FilterField::Region => self.selection.region_id.is_some(),
            FilterField::City => self.selection.city_id.is_some(),
            FilterField::NameContains => !self.name_contains.trim().is_empty(),
            FilterField::IncludeDeleted => self.include_deleted,
            FilterField::ProtectionStatus => self.protection_status.is_some(),
            FilterField::PhysicalCondition => self.physical_condition.is_some(),
            FilterField::AccessibilityStatus => self.accessibility_status.is_some(),
        }
    }
}

fn checkbox(checked: bool) -> String {
    let mark = if checked { "[x]" } else { "[ ]" };
    mark.to_string()
}

fn optional_enum<E: geo_atlas_client::CodedEnum>(code: Option<i32>) -> String {
    match code {
        Some(_) => format_enum::<E>(code),
        None => "Any".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_atlas_client::GeoId;

    #[test]
    fn enum_filters_cycle_without_a_cascade() {
        let mut filter = FilterState::new(None);
        assert!(filter.cycle(FilterField::ProtectionStatus, true).is_none());
        assert_eq!(filter.protection_status, Some(0));
        assert_eq!(
            filter.display(FilterField::ProtectionStatus, &filter.snapshot()),
            "None"
        );

        filter.clear(FilterField::ProtectionStatus);
        assert_eq!(
            filter.display(FilterField::ProtectionStatus, &filter.snapshot()),
            "Any"
        );
    }

    #[test]
    fn region_is_disabled_without_a_country() {
        let mut filter = FilterState::new(None);
        assert!(!filter.selectable(FilterField::Region));
        assert!(filter.cycle(FilterField::Region, true).is_none());
        assert_eq!(filter.selection.region_id, None);
    }

    #[test]
    fn clearing_region_also_clears_city() {
        let mut filter = FilterState::new(None);
        filter.selection = LocationSelection::resolved(Some(GeoId(1)), Some(GeoId(2)), Some(GeoId(3)));

        assert!(filter.clear(FilterField::Region).is_none());
        assert_eq!(filter.selection.country_id, Some(GeoId(1)));
        assert_eq!(filter.selection.region_id, None);
        assert_eq!(filter.selection.city_id, None);
    }

    #[test]
    fn summary_lists_only_active_filters() {
        let mut filter = FilterState::new(None);
        let fields = [
            FilterField::Country,
            FilterField::NameContains,
            FilterField::IncludeDeleted,
        ];
        assert_eq!(filter.summary(&fields), None);

        filter.name_contains = "kra".to_string();
        filter.include_deleted = true;
        filter.selection.select_country(Some(GeoId(4)));
        assert_eq!(
            filter.summary(&fields).as_deref(),
            Some("Country: #4 · Name contains: kra · Include deleted: [x]")
        );
    }
}

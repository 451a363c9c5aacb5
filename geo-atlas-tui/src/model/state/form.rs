use geo_atlas_client::{AccessibilityStatus, GeoId, PhysicalCondition, ProtectionStatus};
use geo_atlas_core::forms::{CityForm, CountryForm, EntityForm, LandmarkForm, RegionForm};
use geo_atlas_core::selection::CascadeSnapshot;
use geo_atlas_core::utils::labels::{cycle_code, format_enum};
use geo_atlas_core::{CoreError, CoreResult, LocationCascade, LocationSelection, TierLoad};

use super::select::{cycle_option, option_label, FieldKind};
use crate::backend::EntityKind;

/// One control of a create/edit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Country,
    Region,
    City,
    Name,
    Code,
    RegionType,
    Description,
    Address,
    Latitude,
    Longitude,
    FirstMentionYear,
    ProtectionStatus,
    PhysicalCondition,
    AccessibilityStatus,
    RegistryUrl,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Country => "Country *",
            Self::Region => "Region",
            Self::City => "City *",
            Self::Name => "Name *",
            Self::Code => "Code *",
            Self::RegionType => "Type",
            Self::Description => "Description",
            Self::Address => "Address",
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
            Self::FirstMentionYear => "First mention year",
            Self::ProtectionStatus => "Protection status",
            Self::PhysicalCondition => "Physical condition",
            Self::AccessibilityStatus => "Accessibility",
            Self::RegistryUrl => "External registry URL",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Country
            | Self::Region
            | Self::City
            | Self::ProtectionStatus
            | Self::PhysicalCondition
            | Self::AccessibilityStatus => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }
}

const COUNTRY_FIELDS: &[FormField] = &[FormField::Name, FormField::Code];
const REGION_FIELDS: &[FormField] = &[FormField::Country, FormField::Name, FormField::RegionType];
const CITY_FIELDS: &[FormField] = &[
    FormField::Country,
    FormField::Region,
    FormField::Name,
    FormField::Latitude,
    FormField::Longitude,
];
const LANDMARK_FIELDS: &[FormField] = &[
    FormField::Country,
    FormField::Region,
    FormField::City,
    FormField::Name,
    FormField::Description,
    FormField::Address,
    FormField::Latitude,
    FormField::Longitude,
    FormField::FirstMentionYear,
    FormField::ProtectionStatus,
    FormField::PhysicalCondition,
    FormField::AccessibilityStatus,
    FormField::RegistryUrl,
];

/// The form behind a dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityDraft {
    Country(CountryForm),
    Region(RegionForm),
    City(CityForm),
    Landmark(LandmarkForm),
}

impl EntityDraft {
    pub fn blank(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Country => Self::Country(CountryForm::default()),
            EntityKind::Region => Self::Region(RegionForm::default()),
            EntityKind::City => Self::City(CityForm::default()),
            EntityKind::Landmark => Self::Landmark(LandmarkForm::default()),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Country(_) => EntityKind::Country,
            Self::Region(_) => EntityKind::Region,
            Self::City(_) => EntityKind::City,
            Self::Landmark(_) => EntityKind::Landmark,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Self::Country(_) => COUNTRY_FIELDS,
            Self::Region(_) => REGION_FIELDS,
            Self::City(_) => CITY_FIELDS,
            Self::Landmark(_) => LANDMARK_FIELDS,
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        match self {
            Self::Country(form) => form.validate(),
            Self::Region(form) => form.validate(),
            Self::City(form) => form.validate(),
            Self::Landmark(form) => form.validate(),
        }
    }

    pub fn text(&self, field: FormField) -> Option<&str> {
        let text = match (self, field) {
            (Self::Country(f), FormField::Name) => &f.name,
            (Self::Country(f), FormField::Code) => &f.code,
            (Self::Region(f), FormField::Name) => &f.name,
            (Self::Region(f), FormField::RegionType) => &f.region_type,
            (Self::City(f), FormField::Name) => &f.name,
            (Self::City(f), FormField::Latitude) => &f.latitude,
            (Self::City(f), FormField::Longitude) => &f.longitude,
            (Self::Landmark(f), FormField::Name) => &f.name,
            (Self::Landmark(f), FormField::Description) => &f.description,
            (Self::Landmark(f), FormField::Address) => &f.address,
            (Self::Landmark(f), FormField::Latitude) => &f.latitude,
            (Self::Landmark(f), FormField::Longitude) => &f.longitude,
            (Self::Landmark(f), FormField::FirstMentionYear) => &f.first_mention_year,
            (Self::Landmark(f), FormField::RegistryUrl) => &f.external_registry_url,
            _ => return None,
        };
        Some(text.as_str())
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match (self, field) {
            (Self::Country(f), FormField::Name) => Some(&mut f.name),
            (Self::Country(f), FormField::Code) => Some(&mut f.code),
            (Self::Region(f), FormField::Name) => Some(&mut f.name),
            (Self::Region(f), FormField::RegionType) => Some(&mut f.region_type),
            (Self::City(f), FormField::Name) => Some(&mut f.name),
            (Self::City(f), FormField::Latitude) => Some(&mut f.latitude),
            (Self::City(f), FormField::Longitude) => Some(&mut f.longitude),
            (Self::Landmark(f), FormField::Name) => Some(&mut f.name),
            (Self::Landmark(f), FormField::Description) => Some(&mut f.description),
            (Self::Landmark(f), FormField::Address) => Some(&mut f.address),
            (Self::Landmark(f), FormField::Latitude) => Some(&mut f.latitude),
            (Self::Landmark(f), FormField::Longitude) => Some(&mut f.longitude),
            (Self::Landmark(f), FormField::FirstMentionYear) => Some(&mut f.first_mention_year),
            (Self::Landmark(f), FormField::RegistryUrl) => Some(&mut f.external_registry_url),
            _ => None,
        }
    }

    /// Location chain of the draft. The region form only has a country.
    pub fn selection(&self) -> LocationSelection {
        match self {
            Self::City(f) => f.selection,
            Self::Landmark(f) => f.selection,
            Self::Region(f) => LocationSelection {
                country_id: f.country_id,
                ..LocationSelection::default()
            },
            Self::Country(_) => LocationSelection::default(),
        }
    }

    fn selection_mut(&mut self) -> Option<&mut LocationSelection> {
        match self {
            Self::City(f) => Some(&mut f.selection),
            Self::Landmark(f) => Some(&mut f.selection),
            Self::Region(_) | Self::Country(_) => None,
        }
    }
}

/// A create or edit dialog.
pub struct FormModal {
    pub draft: EntityDraft,
    /// Set when editing.
    pub existing_id: Option<GeoId>,
    /// Option lists of the dialog's select fields.
    pub cascade: LocationCascade,
    pub focus: usize,
    /// Validation or save error shown under the fields.
    pub error: Option<String>,
    /// A save request is in flight.
    pub saving: bool,
}

impl FormModal {
    pub fn new(draft: EntityDraft, existing_id: Option<GeoId>, cascade: LocationCascade) -> Self {
        Self {
            draft,
            existing_id,
            cascade,
            focus: 0,
            error: None,
            saving: false,
        }
    }

    pub fn title(&self) -> String {
        let action = if self.existing_id.is_some() { "Edit" } else { "New" };
        format!(" {action} {} ", self.draft.kind().name())
    }

    pub fn focused_field(&self) -> Option<FormField> {
        self.draft.fields().get(self.focus).copied()
    }

    pub fn next_field(&mut self) {
        let count = self.draft.fields().len();
        self.focus = (self.focus + 1) % count;
    }

    pub fn prev_field(&mut self) {
        let count = self.draft.fields().len();
        self.focus = (self.focus + count - 1) % count;
    }

    /// Option loads needed when the dialog opens.
    ///
    /// An edited city or landmark already has its chain set, so the tiers below the
    /// country are scoped to it right away.
    pub fn opening_loads(&self) -> Vec<TierLoad> {
        if self.draft.kind() == EntityKind::Country {
            return Vec::new();
        }
        let mut loads = vec![self.cascade.initialize()];
        let selection = self.draft.selection();
        match &self.draft {
            EntityDraft::City(_) if selection.country_id.is_some() => {
                loads.push(self.cascade.set_region_scope(selection.country_id));
            }
            EntityDraft::Landmark(_) if selection.country_id.is_some() => {
                loads.push(self.cascade.country_changed(&selection));
            }
            _ => {}
        }
        loads
    }

    /// Whether the focused select can be changed right now.
    pub fn selectable(&self, field: FormField, snapshot: &CascadeSnapshot) -> bool {
        let selection = self.draft.selection();
        match field {
            FormField::Country => snapshot.country_selectable(),
            FormField::Region => snapshot.region_selectable(&selection),
            FormField::City => snapshot.city_selectable(&selection),
            _ => field.kind() == FieldKind::Select,
        }
    }

    /// Moves the focused select field; returns the option load it requires.
    pub fn cycle(&mut self, forward: bool) -> Option<TierLoad> {
        let field = self.focused_field()?;
        let snapshot = self.cascade.snapshot();
        if !self.selectable(field, &snapshot) {
            return None;
        }
        self.error = None;
        let cascade = &self.cascade;
        match (field, &mut self.draft) {
            (FormField::Country, EntityDraft::Region(form)) => {
                form.country_id = cycle_option(&snapshot.countries.options, form.country_id, forward);
                None
            }
            (FormField::Country, EntityDraft::City(form)) => {
                let next = cycle_option(&snapshot.countries.options, form.selection.country_id, forward);
                form.selection
                    .select_country(next)
                    .then(|| cascade.set_region_scope(form.selection.country_id))
            }
            (FormField::Country, EntityDraft::Landmark(form)) => {
                let next = cycle_option(&snapshot.countries.options, form.selection.country_id, forward);
                form.selection
                    .select_country(next)
                    .then(|| cascade.country_changed(&form.selection))
            }
            (FormField::Region, EntityDraft::City(form)) => {
                let next = cycle_option(&snapshot.regions.options, form.selection.region_id, forward);
                form.selection.select_region(next);
                None
            }
            (FormField::Region, EntityDraft::Landmark(form)) => {
                let next = cycle_option(&snapshot.regions.options, form.selection.region_id, forward);
                form.selection
                    .select_region(next)
                    .then(|| cascade.region_changed(&form.selection))
            }
            (FormField::City, EntityDraft::Landmark(form)) => {
                let next = cycle_option(&snapshot.cities.options, form.selection.city_id, forward);
                form.selection.select_city(next);
                None
            }
            (FormField::ProtectionStatus, EntityDraft::Landmark(form)) => {
                form.protection_status = cycle_code::<ProtectionStatus>(form.protection_status, forward);
                None
            }
            (FormField::PhysicalCondition, EntityDraft::Landmark(form)) => {
                form.physical_condition =
                    cycle_code::<PhysicalCondition>(form.physical_condition, forward);
                None
            }
            (FormField::AccessibilityStatus, EntityDraft::Landmark(form)) => {
                form.accessibility_status =
                    cycle_code::<AccessibilityStatus>(form.accessibility_status, forward);
                None
            }
            _ => None,
        }
    }

    /// Empties the focused field. Clearing a location also clears what depends on it.
    pub fn clear_field(&mut self) -> Option<TierLoad> {
        let field = self.focused_field()?;
        self.error = None;
        if let Some(text) = self.draft.text_mut(field) {
            text.clear();
            return None;
        }
        let cascade = &self.cascade;
        if let EntityDraft::Region(form) = &mut self.draft {
            if field == FormField::Country {
                form.country_id = None;
            }
            return None;
        }
        let kind = self.draft.kind();
        let selection = self.draft.selection_mut()?;
        match field {
            FormField::Country => selection
                .select_country(None)
                .then(|| cascade.country_changed(selection)),
            FormField::Region => {
                let changed = selection.select_region(None);
                (changed && kind == EntityKind::Landmark).then(|| cascade.region_changed(selection))
            }
            FormField::City => {
                selection.select_city(None);
                None
            }
            _ => None,
        }
    }

    pub fn input(&mut self, ch: char) {
        if let Some(text) = self.focused_field().and_then(|f| self.draft.text_mut(f)) {
            text.push(ch);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_field().and_then(|f| self.draft.text_mut(f)) {
            text.pop();
        }
    }

    /// Current value of a field as shown in the dialog.
    pub fn display(&self, field: FormField, snapshot: &CascadeSnapshot) -> String {
        if let Some(text) = self.draft.text(field) {
            return text.to_string();
        }
        let selection = self.draft.selection();
        match (field, &self.draft) {
            (FormField::Country, _) => {
                option_label(&snapshot.countries, selection.country_id, "Select a country")
            }
            (FormField::Region, _) => option_label(&snapshot.regions, selection.region_id, "None"),
            (FormField::City, _) => {
                option_label(&snapshot.cities, selection.city_id, "Select a city")
            }
            (FormField::ProtectionStatus, EntityDraft::Landmark(f)) => {
                format_enum::<ProtectionStatus>(Some(f.protection_status))
            }
            (FormField::PhysicalCondition, EntityDraft::Landmark(f)) => {
                format_enum::<PhysicalCondition>(Some(f.physical_condition))
            }
            (FormField::AccessibilityStatus, EntityDraft::Landmark(f)) => {
                format_enum::<AccessibilityStatus>(Some(f.accessibility_status))
            }
            _ => String::new(),
        }
    }
}

/// Error text shown inside the dialog, without the validation prefix.
pub fn inline_message(error: &CoreError) -> String {
    match error {
        CoreError::Validation(message) => message.clone(),
        other => other.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_drafts_match_their_kind() {
        for kind in [
            EntityKind::Country,
            EntityKind::Region,
            EntityKind::City,
            EntityKind::Landmark,
        ] {
            assert_eq!(EntityDraft::blank(kind).kind(), kind);
        }
    }

    #[test]
    fn text_fields_are_reachable() {
        let mut draft = EntityDraft::blank(EntityKind::Landmark);
        for &field in draft.fields() {
            let editable = draft.text_mut(field).is_some();
            assert_eq!(editable, field.kind() == FieldKind::Text, "{field:?}");
        }
        if let Some(name) = draft.text_mut(FormField::Name) {
            name.push_str("Wawel Castle");
        }
        assert_eq!(draft.text(FormField::Name), Some("Wawel Castle"));
        assert_eq!(draft.text(FormField::Country), None);
    }

    #[test]
    fn country_form_validates_code() {
        let mut draft = EntityDraft::blank(EntityKind::Country);
        if let Some(name) = draft.text_mut(FormField::Name) {
            name.push_str("Poland");
        }
        let err = draft.validate().unwrap_err();
        assert_eq!(inline_message(&err), "Code is required");
    }

    #[test]
    fn region_selection_exposes_only_the_country() {
        let draft = EntityDraft::Region(RegionForm {
            country_id: Some(GeoId(3)),
            ..RegionForm::default()
        });
        let selection = draft.selection();
        assert_eq!(selection.country_id, Some(GeoId(3)));
        assert_eq!(selection.region_id, None);
    }
}

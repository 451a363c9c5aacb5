use geo_atlas_client::{CodedEnum, GeoId};
use geo_atlas_core::selection::TierSnapshot;
use geo_atlas_core::GeoOption;

/// How a dialog field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// ←/→ through a fixed or loaded option list.
    Select,
    /// Space toggles.
    Checkbox,
}

/// Option next to `current` in `options`, with the empty choice before the first one.
///
/// An id that is not in the list (e.g. options still loading) counts as empty.
pub fn cycle_option(options: &[GeoOption], current: Option<GeoId>, forward: bool) -> Option<GeoId> {
    let slots = options.len() + 1;
    let position = current
        .and_then(|id| options.iter().position(|o| o.id == id))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (position + 1) % slots
    } else {
        (position + slots - 1) % slots
    };
    next.checked_sub(1).map(|i| options[i].id)
}

/// Same as [`cycle_option`] over the codes of an enum, for optional filters.
pub fn cycle_optional_code<E: CodedEnum>(current: Option<i32>, forward: bool) -> Option<i32> {
    let codes: Vec<i32> = E::ALL.iter().map(|v| v.code()).collect();
    let slots = codes.len() + 1;
    let position = current
        .and_then(|code| codes.iter().position(|&c| c == code))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (position + 1) % slots
    } else {
        (position + slots - 1) % slots
    };
    next.checked_sub(1).map(|i| codes[i])
}

/// Text shown for a select field bound to a cascade tier.
pub fn option_label(tier: &TierSnapshot, id: Option<GeoId>, empty: &str) -> String {
    match (id, tier.find(id)) {
        (_, Some(option)) => option.display(),
        (Some(_), None) if tier.loading => "Loading...".to_string(),
        (Some(id), None) => format!("#{id}"),
        (None, _) => empty.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_atlas_client::ProtectionStatus;

    fn options() -> Vec<GeoOption> {
        vec![
            GeoOption::new(GeoId(10), "Lesser Poland"),
            GeoOption::new(GeoId(20), "Silesia"),
        ]
    }

    #[test]
    fn cycles_through_the_empty_choice() {
        let opts = options();
        assert_eq!(cycle_option(&opts, None, true), Some(GeoId(10)));
        assert_eq!(cycle_option(&opts, Some(GeoId(10)), true), Some(GeoId(20)));
        assert_eq!(cycle_option(&opts, Some(GeoId(20)), true), None);
        assert_eq!(cycle_option(&opts, None, false), Some(GeoId(20)));
    }

    #[test]
    fn unknown_id_counts_as_empty() {
        assert_eq!(cycle_option(&options(), Some(GeoId(99)), true), Some(GeoId(10)));
        assert_eq!(cycle_option(&[], Some(GeoId(99)), true), None);
    }

    #[test]
    fn optional_codes_wrap_to_no_filter() {
        assert_eq!(cycle_optional_code::<ProtectionStatus>(None, true), Some(0));
        assert_eq!(cycle_optional_code::<ProtectionStatus>(Some(4), true), None);
        assert_eq!(cycle_optional_code::<ProtectionStatus>(None, false), Some(4));
    }

    #[test]
    fn labels_follow_the_tier() {
        let tier = TierSnapshot {
            options: vec![GeoOption::new(GeoId(1), "Poland").with_auxiliary("PL")],
            loading: false,
        };
        assert_eq!(option_label(&tier, Some(GeoId(1)), "All"), "Poland (PL)");
        assert_eq!(option_label(&tier, None, "All"), "All");
        assert_eq!(option_label(&tier, Some(GeoId(5)), "All"), "#5");

        let loading = TierSnapshot {
            options: Vec::new(),
            loading: true,
        };
        assert_eq!(option_label(&loading, Some(GeoId(5)), "All"), "Loading...");
    }
}

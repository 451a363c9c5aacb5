//! Display labels for coded enums

use geo_atlas_client::CodedEnum;

/// Label for a raw enum code: `"N/A"` when missing, `"Unknown (<v>)"` when unmapped.
pub fn format_enum<E: CodedEnum>(value: Option<i32>) -> String {
    match value {
        None => "N/A".to_string(),
        Some(code) => E::from_code(code).map_or_else(
            || format!("Unknown ({code})"),
            |variant| variant.label().to_string(),
        ),
    }
}

/// `(code, label)` pairs in declaration order, for selectors.
pub fn enum_options<E: CodedEnum>() -> Vec<(i32, &'static str)> {
    E::ALL.iter().map(|v| (v.code(), v.label())).collect()
}

/// Code following `current` in declaration order, wrapping around.
///
/// An unmapped code moves to the first variant.
pub fn cycle_code<E: CodedEnum>(current: i32, forward: bool) -> i32 {
    let all = E::ALL;
    let Some(pos) = all.iter().position(|v| v.code() == current) else {
        return all.first().map_or(current, |v| v.code());
    };
    let len = all.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    all[next].code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_atlas_client::{AccessibilityStatus, PhysicalCondition, ProtectionStatus};

    #[test]
    fn known_codes_use_labels() {
        assert_eq!(format_enum::<ProtectionStatus>(Some(4)), "Heritage Site");
        assert_eq!(format_enum::<PhysicalCondition>(Some(0)), "Unknown");
    }

    #[test]
    fn unmapped_and_missing_codes() {
        assert_eq!(format_enum::<ProtectionStatus>(Some(9)), "Unknown (9)");
        assert_eq!(format_enum::<AccessibilityStatus>(None), "N/A");
    }

    #[test]
    fn options_in_declaration_order() {
        let options = enum_options::<AccessibilityStatus>();
        assert_eq!(
            options,
            vec![
                (0, "Unknown"),
                (1, "Public"),
                (2, "Restricted"),
                (3, "Private"),
                (4, "Closed")
            ]
        );
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(cycle_code::<PhysicalCondition>(5, true), 0);
        assert_eq!(cycle_code::<PhysicalCondition>(0, false), 5);
        assert_eq!(cycle_code::<PhysicalCondition>(2, true), 3);
        assert_eq!(cycle_code::<PhysicalCondition>(77, true), 0);
    }
}

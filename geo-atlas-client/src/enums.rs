//! Landmark classification enums
//!
//! The API transmits these as small integers. The code-to-variant table below must
//! follow the backend enum ordering exactly.

/// An enum transmitted as an integer code with a display label.
pub trait CodedEnum: Copy + Sized + 'static {
    /// Every variant, in backend order.
    const ALL: &'static [Self];

    /// Integer code on the wire.
    fn code(self) -> i32;

    /// Display label.
    fn label(self) -> &'static str;

    /// Looks up the variant for a wire code.
    fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }
}

/// Legal protection status of a landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProtectionStatus {
    #[default]
    None,
    Protected,
    Listed,
    Monument,
    HeritageSite,
}

impl CodedEnum for ProtectionStatus {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Protected,
        Self::Listed,
        Self::Monument,
        Self::HeritageSite,
    ];

    fn code(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Protected => 1,
            Self::Listed => 2,
            Self::Monument => 3,
            Self::HeritageSite => 4,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Protected => "Protected",
            Self::Listed => "Listed",
            Self::Monument => "Monument",
            Self::HeritageSite => "Heritage Site",
        }
    }
}

/// Physical condition of a landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhysicalCondition {
    #[default]
    Unknown,
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl CodedEnum for PhysicalCondition {
    const ALL: &'static [Self] = &[
        Self::Unknown,
        Self::Excellent,
        Self::Good,
        Self::Fair,
        Self::Poor,
        Self::Critical,
    ];

    fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Excellent => 1,
            Self::Good => 2,
            Self::Fair => 3,
            Self::Poor => 4,
            Self::Critical => 5,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        }
    }
}

/// Public accessibility of a landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessibilityStatus {
    #[default]
    Unknown,
    Public,
    Restricted,
    Private,
    Closed,
}

impl CodedEnum for AccessibilityStatus {
    const ALL: &'static [Self] = &[
        Self::Unknown,
        Self::Public,
        Self::Restricted,
        Self::Private,
        Self::Closed,
    ];

    fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Public => 1,
            Self::Restricted => 2,
            Self::Private => 3,
            Self::Closed => 4,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Public => "Public",
            Self::Restricted => "Restricted",
            Self::Private => "Private",
            Self::Closed => "Closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_codes_are_positions<E: CodedEnum + std::fmt::Debug>() {
        for (i, v) in E::ALL.iter().enumerate() {
            assert_eq!(usize::try_from(v.code()).ok(), Some(i), "{v:?}");
        }
    }

    #[test]
    fn codes_follow_backend_order() {
        assert_codes_are_positions::<ProtectionStatus>();
        assert_codes_are_positions::<PhysicalCondition>();
        assert_codes_are_positions::<AccessibilityStatus>();
    }

    #[test]
    fn from_code_round_trips_known_codes() {
        assert_eq!(
            ProtectionStatus::from_code(4),
            Some(ProtectionStatus::HeritageSite)
        );
        assert_eq!(PhysicalCondition::from_code(5), Some(PhysicalCondition::Critical));
        assert_eq!(AccessibilityStatus::from_code(5), None);
        assert_eq!(ProtectionStatus::from_code(-1), None);
    }
}

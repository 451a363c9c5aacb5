//! Entity identifiers
//!
//! The backend sends ids either as JSON numbers or as numeric strings. Everything on
//! this side of the wire works with the canonical integer form, [`GeoId`].

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Canonical identifier of a persisted entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GeoId(pub i64);

impl GeoId {
    /// Returns the raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// `true` for the zero id produced by normalizing a missing value.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Drops zero ids, which never name a real selection.
    pub fn non_zero(id: Option<Self>) -> Option<Self> {
        id.filter(|id| !id.is_zero())
    }
}

impl fmt::Display for GeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for GeoId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Identifier as it arrives at the boundary, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl From<i64> for RawId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RawId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Normalizes a boundary identifier to its canonical form.
///
/// A missing value maps to `0`, and so does a string without a leading integer.
/// Strings are read like a lenient integer parse: surrounding whitespace is skipped,
/// an optional sign and the leading run of digits are used (`"42abc"` is `42`).
pub fn to_canonical_id(value: Option<&RawId>) -> GeoId {
    match value {
        None => GeoId(0),
        Some(RawId::Int(v)) => GeoId(*v),
        Some(RawId::Text(s)) => GeoId(parse_leading_int(s).unwrap_or(0)),
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

struct GeoIdVisitor;

impl Visitor<'_> for GeoIdVisitor {
    type Value = GeoId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<GeoId, E> {
        Ok(GeoId(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<GeoId, E> {
        i64::try_from(v)
            .map(GeoId)
            .map_err(|_| E::custom(format!("id out of range: {v}")))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<GeoId, E> {
        Ok(GeoId(v.trunc() as i64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<GeoId, E> {
        Ok(to_canonical_id(Some(&RawId::Text(v.to_string()))))
    }

    fn visit_unit<E: de::Error>(self) -> Result<GeoId, E> {
        Ok(to_canonical_id(None))
    }
}

impl<'de> Deserialize<'de> for GeoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GeoIdVisitor)
    }
}

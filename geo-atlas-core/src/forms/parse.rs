//! Lenient parsing of optional numeric form fields
//!
//! Blank or unparsable input means "no value". Trailing garbage after a numeric
//! prefix is ignored, so `"12.5 km"` reads as `12.5`.

/// Parses an optional decimal (coordinates).
pub fn parse_nullable_number(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let candidate_len = s
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map_or(s.len(), |(i, _)| i);
    let candidate = &s[..candidate_len];
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Parses an optional integer (years).
pub fn parse_nullable_int(value: &str) -> Option<i32> {
    let s = value.trim_start();
    let (sign_len, negative) = match s.as_bytes().first() {
        Some(b'-') => (1, true),
        Some(b'+') => (1, false),
        _ => (0, false),
    };
    let digits = &s[sign_len..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Formats an optional number for an editable text field.
pub fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Trims text and maps blank input to `None`.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(parse_nullable_number(""), None);
        assert_eq!(parse_nullable_number("   "), None);
        assert_eq!(parse_nullable_number("52.23"), Some(52.23));
        assert_eq!(parse_nullable_number(" -0.5"), Some(-0.5));
        assert_eq!(parse_nullable_number("12.5 km"), Some(12.5));
        assert_eq!(parse_nullable_number("1e3"), Some(1000.0));
        assert_eq!(parse_nullable_number("abc"), None);
        assert_eq!(parse_nullable_number("inf"), None);
    }

    #[test]
    fn integers() {
        assert_eq!(parse_nullable_int(""), None);
        assert_eq!(parse_nullable_int("1410"), Some(1410));
        assert_eq!(parse_nullable_int("-300"), Some(-300));
        assert_eq!(parse_nullable_int("1410.7"), Some(1410));
        assert_eq!(parse_nullable_int("AD 1410"), None);
        assert_eq!(parse_nullable_int("99999999999"), None);
    }

    #[test]
    fn blank_text_is_none() {
        assert_eq!(non_blank("  "), None);
        assert_eq!(non_blank(" Main St "), Some("Main St".to_string()));
        assert_eq!(format_optional(Some(1.5)), "1.5");
        assert_eq!(format_optional::<i32>(None), "");
    }
}

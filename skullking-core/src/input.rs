//! Coercion of raw boundary input into trick counts.
//!
//! Numeric fields never reject input: anything that is not a non-negative
//! integer in range is read as "no entry", which is 0.

/// Read a trick count typed into a text field
pub fn parse_count(text: &str) -> u32 {
    text.trim().parse::<u32>().unwrap_or(0)
}

/// Clamp a signed value coming from a numeric widget
pub fn coerce_count(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_counts() {
        assert_eq!(parse_count("0"), 0);
        assert_eq!(parse_count("7"), 7);
        assert_eq!(parse_count("  12 "), 12);
        assert_eq!(parse_count("+3"), 3);
    }

    #[test]
    fn test_parse_malformed_is_zero() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("   "), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("-2"), 0);
        assert_eq!(parse_count("2.5"), 0);
        assert_eq!(parse_count("99999999999"), 0);
    }

    #[test]
    fn test_coerce_signed_values() {
        assert_eq!(coerce_count(4), 4);
        assert_eq!(coerce_count(-1), 0);
        assert_eq!(coerce_count(i64::MAX), 0);
    }
}

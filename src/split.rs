//! Splitting and joining of structured ids.
//!
//! A structured id has the form `<prefix><marker><sequence>`, where the
//! marker occurs exactly once and the sequence is a canonical decimal.

/// Returns true if `s` is a canonical non-negative decimal.
///
/// Canonical means non-empty, ASCII digits only, no sign, and no leading
/// zero unless the value is exactly `"0"`. This keeps every number to a
/// single spelling, so `"01"` and `"1"` can never name the same entity.
///
/// # Examples
///
/// ```
/// use prefixtag::split::is_canonical_number;
///
/// assert!(is_canonical_number("0"));
/// assert!(is_canonical_number("42"));
/// assert!(!is_canonical_number("042"));
/// assert!(!is_canonical_number("+42"));
/// assert!(!is_canonical_number(""));
/// ```
#[must_use]
pub fn is_canonical_number(s: &str) -> bool {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    s == "0" || !s.starts_with('0')
}

/// Splits a structured id into its prefix and sequence.
///
/// Returns `None` unless `marker` occurs exactly once and the remainder is a
/// canonical decimal that fits in an `i64`. The returned sequence is never
/// negative.
///
/// # Examples
///
/// ```
/// use prefixtag::split::split_id;
///
/// assert_eq!(split_id("mysql/0_a_5", "_a_"), Some(("mysql/0", 5)));
/// assert_eq!(split_id("mysql/0_a_05", "_a_"), None);
/// assert_eq!(split_id("a_a_b_a_1", "_a_"), None);
/// ```
#[must_use]
pub fn split_id<'a>(id: &'a str, marker: &str) -> Option<(&'a str, i64)> {
    if marker.is_empty() {
        return None;
    }
    let (prefix, rest) = id.split_once(marker)?;
    if rest.contains(marker) {
        return None;
    }
    if !is_canonical_number(rest) {
        return None;
    }
    let sequence = rest.parse::<i64>().ok()?;
    Some((prefix, sequence))
}

/// Joins a prefix and sequence into a structured id.
///
/// The sequence is rendered in plain decimal. Negative sequences produce an
/// id that [`split_id`] rejects.
#[must_use]
pub fn join_id(prefix: &str, marker: &str, sequence: i64) -> String {
    format!("{prefix}{marker}{sequence}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ========== is_canonical_number ==========

    #[test]
    fn test_canonical_zero() {
        assert!(is_canonical_number("0"));
    }

    #[test]
    fn test_canonical_plain_numbers() {
        assert!(is_canonical_number("1"));
        assert!(is_canonical_number("10"));
        assert!(is_canonical_number("9223372036854775807"));
    }

    #[test]
    fn test_canonical_rejects_leading_zero() {
        assert!(!is_canonical_number("00"));
        assert!(!is_canonical_number("01"));
        assert!(!is_canonical_number("007"));
    }

    #[test]
    fn test_canonical_rejects_signs() {
        assert!(!is_canonical_number("-1"));
        assert!(!is_canonical_number("+1"));
        assert!(!is_canonical_number("-0"));
    }

    #[test]
    fn test_canonical_rejects_non_digits() {
        assert!(!is_canonical_number(""));
        assert!(!is_canonical_number("1a"));
        assert!(!is_canonical_number(" 1"));
        assert!(!is_canonical_number("1.0"));
        assert!(!is_canonical_number("١"));
    }

    // ========== split_id ==========

    #[test]
    fn test_split_simple() {
        assert_eq!(split_id("p_a_7", "_a_"), Some(("p", 7)));
    }

    #[test]
    fn test_split_zero_sequence() {
        assert_eq!(split_id("p_a_0", "_a_"), Some(("p", 0)));
    }

    #[test]
    fn test_split_leading_zero_rejected() {
        assert_eq!(split_id("p_a_01", "_a_"), None);
        assert_eq!(split_id("p_a_00", "_a_"), None);
    }

    #[test]
    fn test_split_marker_twice() {
        assert_eq!(split_id("a_a_b_a_1", "_a_"), None);
        assert_eq!(split_id("p_a_1_a_", "_a_"), None);
    }

    #[test]
    fn test_split_marker_missing() {
        assert_eq!(split_id("nomarkerhere", "_a_"), None);
        assert_eq!(split_id("", "_a_"), None);
    }

    #[test]
    fn test_split_empty_marker() {
        assert_eq!(split_id("p1", ""), None);
    }

    #[test]
    fn test_split_empty_suffix() {
        assert_eq!(split_id("p_a_", "_a_"), None);
    }

    #[test]
    fn test_split_empty_prefix_is_structurally_fine() {
        assert_eq!(split_id("_a_3", "_a_"), Some(("", 3)));
    }

    #[test]
    fn test_split_signed_suffix_rejected() {
        assert_eq!(split_id("p_a_-1", "_a_"), None);
        assert_eq!(split_id("p_a_+1", "_a_"), None);
    }

    #[test]
    fn test_split_non_numeric_suffix() {
        assert_eq!(split_id("p_a_x", "_a_"), None);
        assert_eq!(split_id("p_a_1x", "_a_"), None);
    }

    #[test]
    fn test_split_overflow() {
        let id = format!("p_a_{}", i64::MAX);
        assert_eq!(split_id(&id, "_a_"), Some(("p", i64::MAX)));

        // i64::MAX + 1
        assert_eq!(split_id("p_a_9223372036854775808", "_a_"), None);
    }

    #[test]
    fn test_split_marker_prefix_overlap() {
        // "_ar_" contains neither "_a_" nor the reverse, so each kind only
        // sees its own marker.
        assert_eq!(split_id("foo/0_ar_2", "_a_"), None);
        assert_eq!(split_id("foo/0_a_2", "_ar_"), None);
        assert_eq!(split_id("foo/0_ar_2", "_ar_"), Some(("foo/0", 2)));
    }

    #[test]
    fn test_split_keeps_unit_slash() {
        assert_eq!(split_id("mysql/12_a_3", "_a_"), Some(("mysql/12", 3)));
    }

    // ========== join_id ==========

    #[test]
    fn test_join_formats_plain_decimal() {
        assert_eq!(join_id("foo/0", "_a_", 5), "foo/0_a_5");
        assert_eq!(join_id("foo/0", "_ar_", 0), "foo/0_ar_0");
    }

    #[test]
    fn test_join_negative_does_not_split() {
        let id = join_id("foo/0", "_a_", -1);
        assert_eq!(id, "foo/0_a_-1");
        assert_eq!(split_id(&id, "_a_"), None);
    }

    proptest! {
        #[test]
        fn prop_join_then_split(prefix in "[a-z][a-z0-9]{0,10}(/[0-9]{1,3})?", sequence in 0i64..i64::MAX) {
            let id = join_id(&prefix, "_a_", sequence);
            prop_assert_eq!(split_id(&id, "_a_"), Some((prefix.as_str(), sequence)));
        }

        #[test]
        fn prop_leading_zero_never_splits(prefix in "[a-z]{1,8}", digits in "0[0-9]{1,8}") {
            let id = format!("{prefix}_a_{digits}");
            prop_assert_eq!(split_id(&id, "_a_"), None);
        }

        #[test]
        fn prop_split_sequence_non_negative(id in ".*") {
            if let Some((_, sequence)) = split_id(&id, "_a_") {
                prop_assert!(sequence >= 0);
            }
        }
    }
}

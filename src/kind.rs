use crate::tag::{ACTION_RESULT_TAG_KIND, ACTION_TAG_KIND};

/// Fixed parameters of a prefixed tag kind: its kind name and the marker
/// token that separates the owner prefix from the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrefixedKind {
    /// Kind name used in the tag string, such as `action`.
    pub kind: &'static str,
    /// Token placed between the owner prefix and the sequence.
    pub marker: &'static str,
}

impl PrefixedKind {
    /// Actions queued against a unit or service.
    pub const ACTION: Self = Self::new(ACTION_TAG_KIND, "_a_");

    /// Results recorded for an action.
    pub const ACTION_RESULT: Self = Self::new(ACTION_RESULT_TAG_KIND, "_ar_");

    /// Describes a kind with the given name and marker.
    #[must_use]
    pub const fn new(kind: &'static str, marker: &'static str) -> Self {
        Self { kind, marker }
    }

    /// Builds an id for this kind from its parts.
    #[must_use]
    pub fn join(&self, prefix: &str, sequence: i64) -> String {
        crate::split::join_id(prefix, self.marker, sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_constants() {
        assert_eq!(PrefixedKind::ACTION.kind, "action");
        assert_eq!(PrefixedKind::ACTION.marker, "_a_");
    }

    #[test]
    fn test_action_result_constants() {
        assert_eq!(PrefixedKind::ACTION_RESULT.kind, "actionresult");
        assert_eq!(PrefixedKind::ACTION_RESULT.marker, "_ar_");
    }

    #[test]
    fn test_custom_kind() {
        let kind = PrefixedKind::new("job", "_j_");
        assert_eq!(kind.kind, "job");
        assert_eq!(kind.join("db", 4), "db_j_4");
    }

    #[test]
    fn test_markers_do_not_contain_each_other() {
        let a = PrefixedKind::ACTION.marker;
        let ar = PrefixedKind::ACTION_RESULT.marker;
        assert!(!a.contains(ar));
        assert!(!ar.contains(a));
    }
}

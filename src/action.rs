//! Action and action-result tags.
//!
//! An action id is `<owner>_a_<sequence>` and an action-result id is
//! `<owner>_ar_<sequence>`, where the owner is the unit or service the
//! action was queued for.

use crate::kind::PrefixedKind;
use crate::macros::define_prefixed_tag;

define_prefixed_tag!(
    /// Tag for an action queued against a unit or service.
    ActionTag,
    PrefixedKind::ACTION,
    Action,
    "action"
);

define_prefixed_tag!(
    /// Tag for the recorded result of an action.
    ActionResultTag,
    PrefixedKind::ACTION_RESULT,
    ActionResult,
    "action result"
);

impl ActionTag {
    /// Builds an action tag from its owner prefix and sequence.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` is not a unit or service name, or if `sequence`
    /// is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefixtag::{ActionTag, Tag};
    ///
    /// let tag = ActionTag::join("mysql/0", 5);
    /// assert_eq!(tag.id(), "mysql/0_a_5");
    /// assert_eq!(tag.to_string(), "action-mysql/0_a_5");
    /// ```
    #[must_use]
    pub fn join(prefix: &str, sequence: i64) -> Self {
        let id = Self::KIND.join(prefix, sequence);
        match Self::try_new(&id) {
            Some(tag) => tag,
            None => panic!("bad prefix or sequence"),
        }
    }
}

/// Returns true if `id` is a valid action id.
#[must_use]
pub fn is_valid_action(id: &str) -> bool {
    ActionTag::is_valid(id)
}

/// Returns true if `id` is a valid action result id.
#[must_use]
pub fn is_valid_action_result(id: &str) -> bool {
    ActionResultTag::is_valid(id)
}

//! The common tag contract and the `kind-id` envelope dispatcher.

use std::fmt;
use std::str::FromStr;

use crate::action::{ActionResultTag, ActionTag};
use crate::error::{Result, TagError};
use crate::names::{ServiceTag, UnitTag, unit_tag_suffix_to_id};

/// Kind name of unit tags.
pub const UNIT_TAG_KIND: &str = "unit";
/// Kind name of service tags.
pub const SERVICE_TAG_KIND: &str = "service";
/// Kind name of action tags.
pub const ACTION_TAG_KIND: &str = "action";
/// Kind name of action result tags.
pub const ACTION_RESULT_TAG_KIND: &str = "actionresult";

/// A typed identifier for an entity.
///
/// The `Display` form is the canonical tag string, `<kind>-<id>`.
pub trait Tag: fmt::Display {
    /// Discriminator naming the kind of entity.
    fn kind(&self) -> &str;

    /// Kind-scoped identifier of the entity.
    fn id(&self) -> &str;
}

/// A tag whose id is `<prefix><marker><sequence>`, where the prefix names
/// the owning entity.
pub trait PrefixTag: Tag {
    /// The owner portion of the id, or `""` if the id cannot be split.
    fn prefix(&self) -> &str;

    /// The sequence portion of the id, or `-1` if the id cannot be split.
    fn sequence(&self) -> i64;

    /// The tag of the owning entity, if the prefix resolves to one.
    fn prefix_tag(&self) -> Option<AnyTag>;
}

/// Any tag this crate knows how to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyTag {
    Unit(UnitTag),
    Service(ServiceTag),
    Action(ActionTag),
    ActionResult(ActionResultTag),
}

impl AnyTag {
    fn as_tag(&self) -> &dyn Tag {
        match self {
            Self::Unit(t) => t,
            Self::Service(t) => t,
            Self::Action(t) => t,
            Self::ActionResult(t) => t,
        }
    }
}

impl Tag for AnyTag {
    fn kind(&self) -> &str {
        self.as_tag().kind()
    }

    fn id(&self) -> &str {
        self.as_tag().id()
    }
}

impl fmt::Display for AnyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_tag(), f)
    }
}

impl FromStr for AnyTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self> {
        parse_tag(s)
    }
}

impl From<UnitTag> for AnyTag {
    fn from(tag: UnitTag) -> Self {
        Self::Unit(tag)
    }
}

impl From<ServiceTag> for AnyTag {
    fn from(tag: ServiceTag) -> Self {
        Self::Service(tag)
    }
}

impl From<ActionTag> for AnyTag {
    fn from(tag: ActionTag) -> Self {
        Self::Action(tag)
    }
}

impl From<ActionResultTag> for AnyTag {
    fn from(tag: ActionResultTag) -> Self {
        Self::ActionResult(tag)
    }
}

crate::macros::impl_tag_serde!(AnyTag);

/// Parses a tag string of the form `<kind>-<id>`.
///
/// The kind is everything before the first hyphen; the id may itself
/// contain hyphens. Unit ids are written with a hyphen in place of the
/// slash (`unit-mysql-0`).
///
/// # Errors
///
/// Returns `Unrecognized` if there is no hyphen or the kind is unknown, and
/// `InvalidTag` if the kind is known but the id is not valid for it.
///
/// # Examples
///
/// ```
/// use prefixtag::{AnyTag, Tag, parse_tag};
///
/// let tag = parse_tag("action-mysql/0_a_3").unwrap();
/// assert!(matches!(tag, AnyTag::Action(_)));
/// assert_eq!(tag.id(), "mysql/0_a_3");
///
/// assert!(parse_tag("machine-0").is_err());
/// ```
pub fn parse_tag(tag: &str) -> Result<AnyTag> {
    let Some((kind, id)) = tag.split_once('-') else {
        tracing::debug!(tag, "tag has no kind separator");
        return Err(TagError::Unrecognized {
            tag: tag.to_string(),
        });
    };

    let (parsed, kind) = match kind {
        UNIT_TAG_KIND => (
            UnitTag::try_new(&unit_tag_suffix_to_id(id)).map(AnyTag::Unit),
            UNIT_TAG_KIND,
        ),
        SERVICE_TAG_KIND => (ServiceTag::try_new(id).map(AnyTag::Service), SERVICE_TAG_KIND),
        ACTION_TAG_KIND => (ActionTag::try_new(id).map(AnyTag::Action), ACTION_TAG_KIND),
        ACTION_RESULT_TAG_KIND => (
            ActionResultTag::try_new(id).map(AnyTag::ActionResult),
            ACTION_RESULT_TAG_KIND,
        ),
        _ => {
            tracing::debug!(tag, kind, "unknown tag kind");
            return Err(TagError::Unrecognized {
                tag: tag.to_string(),
            });
        }
    };

    parsed.ok_or_else(|| {
        tracing::debug!(tag, kind, "tag id is not valid for its kind");
        TagError::invalid(tag, kind)
    })
}

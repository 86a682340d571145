use std::fmt;

use crate::kind::PrefixedKind;
use crate::names::{is_valid_service, is_valid_unit};
use crate::resolve::OwnerResolver;
use crate::split::split_id;
use crate::tag::{AnyTag, PrefixTag, Tag};

/// Returns true if `id` splits on `marker` and its prefix names a unit or
/// a service.
#[must_use]
pub fn is_valid_prefixed_id(id: &str, marker: &str) -> bool {
    split_id(id, marker)
        .is_some_and(|(prefix, _)| is_valid_unit(prefix) || is_valid_service(prefix))
}

/// Shared state and behavior of tags whose id is
/// `<owner><marker><sequence>`.
///
/// Only constructed through [`IdPrefixer::new`], which checks the id, so
/// every value in circulation is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdPrefixer {
    id: String,
    kind: PrefixedKind,
}

impl IdPrefixer {
    /// Wraps `id` for the given kind, or returns `None` if the id is not
    /// valid for that kind's marker.
    #[must_use]
    pub fn new(id: &str, kind: PrefixedKind) -> Option<Self> {
        is_valid_prefixed_id(id, kind.marker).then(|| Self {
            id: id.to_string(),
            kind,
        })
    }

    /// The marker token separating owner prefix from sequence.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        self.kind.marker
    }

    /// Resolves the owner prefix through a caller-supplied resolver.
    #[must_use]
    pub fn prefix_tag_with(&self, resolver: &OwnerResolver) -> Option<AnyTag> {
        let (prefix, _) = split_id(&self.id, self.kind.marker)?;
        resolver.resolve(prefix)
    }
}

impl Tag for IdPrefixer {
    fn kind(&self) -> &str {
        self.kind.kind
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl PrefixTag for IdPrefixer {
    fn prefix(&self) -> &str {
        split_id(&self.id, self.kind.marker).map_or("", |(prefix, _)| prefix)
    }

    fn sequence(&self) -> i64 {
        split_id(&self.id, self.kind.marker).map_or(-1, |(_, sequence)| sequence)
    }

    fn prefix_tag(&self) -> Option<AnyTag> {
        self.prefix_tag_with(&OwnerResolver::default())
    }
}

impl fmt::Display for IdPrefixer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.kind, self.id)
    }
}

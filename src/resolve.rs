use crate::names::{ServiceTag, UnitTag, is_valid_service, is_valid_unit};
use crate::tag::{AnyTag, parse_tag};

/// One step of owner resolution: a predicate on the prefix and a
/// constructor that turns an accepted prefix into a tag.
#[derive(Debug, Clone, Copy)]
pub struct ResolverStage {
    /// Label used in trace output.
    pub name: &'static str,
    /// Whether this stage applies to the prefix.
    pub accepts: fn(&str) -> bool,
    /// Builds the owner tag for an accepted prefix.
    pub build: fn(&str) -> Option<AnyTag>,
}

impl ResolverStage {
    /// Prefixes that are unit names, such as `mysql/0`.
    pub const UNIT: Self = Self {
        name: "unit",
        accepts: is_valid_unit,
        build: |prefix| UnitTag::try_new(prefix).map(AnyTag::Unit),
    };

    /// Prefixes that are service names, such as `mysql`.
    pub const SERVICE: Self = Self {
        name: "service",
        accepts: is_valid_service,
        build: |prefix| ServiceTag::try_new(prefix).map(AnyTag::Service),
    };

    /// Falls back to the `kind-id` dispatcher, for prefixes written as full
    /// tag strings.
    pub const GENERIC: Self = Self {
        name: "generic",
        accepts: |_| true,
        build: |prefix| parse_tag(prefix).ok(),
    };
}

/// Resolves the owner prefix of a prefixed tag to the owner's own tag.
///
/// Resolution order is the stage order. The first stage whose predicate
/// accepts the prefix and whose constructor yields a tag wins; later stages
/// are not consulted.
#[derive(Debug, Clone)]
pub struct OwnerResolver {
    stages: Vec<ResolverStage>,
}

impl OwnerResolver {
    /// A resolver with no stages; it resolves nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage after the existing ones.
    #[must_use]
    pub fn with_stage(mut self, stage: ResolverStage) -> Self {
        self.stages.push(stage);
        self
    }

    /// The stages in resolution order.
    #[must_use]
    pub fn stages(&self) -> &[ResolverStage] {
        &self.stages
    }

    /// Resolves `prefix` to an owner tag.
    #[must_use]
    pub fn resolve(&self, prefix: &str) -> Option<AnyTag> {
        for stage in self.stages.iter().filter(|stage| (stage.accepts)(prefix)) {
            if let Some(tag) = (stage.build)(prefix) {
                tracing::trace!(prefix, stage = stage.name, "resolved owner");
                return Some(tag);
            }
        }
        tracing::trace!(prefix, "no owner stage resolved prefix");
        None
    }
}

impl Default for OwnerResolver {
    /// Unit, then service, then the generic dispatcher.
    fn default() -> Self {
        Self::empty()
            .with_stage(ResolverStage::UNIT)
            .with_stage(ResolverStage::SERVICE)
            .with_stage(ResolverStage::GENERIC)
    }
}

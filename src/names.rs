//! Owner names: the units and services that prefixed tags belong to.
//!
//! A service name is a lowercase, hyphen-separated word such as `mysql` or
//! `wordpress-db`. A unit name is a service name followed by `/` and a
//! canonical unit number, such as `mysql/0`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TagError};
use crate::split::is_canonical_number;
use crate::tag::{SERVICE_TAG_KIND, Tag, UNIT_TAG_KIND};

fn is_name_segment(segment: &str) -> bool {
    segment
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Returns true if `name` is a valid service name.
///
/// Rules:
/// - One or more segments of `[a-z0-9]` separated by single hyphens
/// - The first segment starts with a letter
/// - Every later segment contains at least one letter, so `mysql-0` is
///   never mistaken for a service when it is really a unit
///
/// # Examples
///
/// ```
/// use prefixtag::names::is_valid_service;
///
/// assert!(is_valid_service("wordpress"));
/// assert!(is_valid_service("my-db2"));
/// assert!(!is_valid_service("mysql-0"));
/// assert!(!is_valid_service("2fast"));
/// ```
#[must_use]
pub fn is_valid_service(name: &str) -> bool {
    let mut segments = name.split('-');
    let Some(first) = segments.next() else {
        return false;
    };
    if !first.starts_with(|c: char| c.is_ascii_lowercase()) || !is_name_segment(first) {
        return false;
    }
    segments.all(|s| is_name_segment(s) && s.bytes().any(|b| b.is_ascii_lowercase()))
}

/// Returns true if `name` is a valid unit name (`<service>/<number>`).
///
/// The number is a canonical decimal that fits in an `i64`.
#[must_use]
pub fn is_valid_unit(name: &str) -> bool {
    name.split_once('/').is_some_and(|(service, number)| {
        is_valid_service(service)
            && is_canonical_number(number)
            && number.parse::<i64>().is_ok()
    })
}

/// Converts the id portion of a `unit-...` tag string back to a unit name.
///
/// Only the last hyphen is replaced, since service names may contain
/// hyphens themselves.
pub(crate) fn unit_tag_suffix_to_id(suffix: &str) -> String {
    match suffix.rfind('-') {
        Some(i) if i > 0 => format!("{}/{}", &suffix[..i], &suffix[i + 1..]),
        _ => suffix.to_string(),
    }
}

/// Tag for a service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceTag {
    name: String,
}

impl ServiceTag {
    /// Returns the tag for the service with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid service name. Use [`ServiceTag::parse`]
    /// for untrusted input.
    #[must_use]
    pub fn new(name: &str) -> Self {
        match Self::try_new(name) {
            Some(tag) => tag,
            None => panic!("{name:?} is not a valid service name"),
        }
    }

    /// Returns the tag for the service, or `None` if the name is invalid.
    #[must_use]
    pub fn try_new(name: &str) -> Option<Self> {
        is_valid_service(name).then(|| Self {
            name: name.to_string(),
        })
    }

    /// Parses a `service-<name>` tag string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTag` if the string is not a well formed service tag.
    pub fn parse(tag: &str) -> Result<Self> {
        match crate::tag::parse_tag(tag) {
            Ok(crate::tag::AnyTag::Service(t)) => Ok(t),
            _ => Err(TagError::invalid(tag, SERVICE_TAG_KIND)),
        }
    }

    /// The service name, such as `wordpress-db`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Tag for ServiceTag {
    fn kind(&self) -> &str {
        SERVICE_TAG_KIND
    }

    fn id(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ServiceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SERVICE_TAG_KIND}-{}", self.name)
    }
}

impl FromStr for ServiceTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Tag for a unit of a service.
///
/// The id keeps the slash (`mysql/0`) while the tag string replaces it
/// with a hyphen (`unit-mysql-0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitTag {
    name: String,
}

impl UnitTag {
    /// Returns the tag for the unit with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid unit name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        match Self::try_new(name) {
            Some(tag) => tag,
            None => panic!("{name:?} is not a valid unit name"),
        }
    }

    /// Returns the tag for the unit, or `None` if the name is invalid.
    #[must_use]
    pub fn try_new(name: &str) -> Option<Self> {
        is_valid_unit(name).then(|| Self {
            name: name.to_string(),
        })
    }

    /// Parses a `unit-<service>-<number>` tag string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTag` if the string is not a well formed unit tag.
    pub fn parse(tag: &str) -> Result<Self> {
        match crate::tag::parse_tag(tag) {
            Ok(crate::tag::AnyTag::Unit(t)) => Ok(t),
            _ => Err(TagError::invalid(tag, UNIT_TAG_KIND)),
        }
    }

    /// The unit name, such as `mysql/0`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the service this unit belongs to.
    #[must_use]
    pub fn service_name(&self) -> &str {
        self.name
            .split_once('/')
            .map_or(self.name.as_str(), |(service, _)| service)
    }

    /// Number of this unit within its service, or `-1` if the name
    /// cannot be split.
    #[must_use]
    pub fn number(&self) -> i64 {
        self.name
            .split_once('/')
            .and_then(|(_, number)| number.parse().ok())
            .unwrap_or(-1)
    }

    /// Tag of the service this unit belongs to.
    #[must_use]
    pub fn service_tag(&self) -> ServiceTag {
        ServiceTag {
            name: self.service_name().to_string(),
        }
    }
}

impl Tag for UnitTag {
    fn kind(&self) -> &str {
        UNIT_TAG_KIND
    }

    fn id(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{UNIT_TAG_KIND}-{}", self.name.replace('/', "-"))
    }
}

impl FromStr for UnitTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

crate::macros::impl_tag_serde!(ServiceTag);
crate::macros::impl_tag_serde!(UnitTag);

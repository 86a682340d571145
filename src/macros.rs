//! Macros shared by the tag types.

/// Implements `Serialize` and `Deserialize` for a tag as its canonical
/// string, deserializing through `FromStr` so malformed input becomes a
/// serde error.
macro_rules! impl_tag_serde {
    ($name:ty) => {
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse::<Self>().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Defines a concrete prefixed tag kind.
///
/// This generates a newtype around [`IdPrefixer`](crate::prefixed::IdPrefixer)
/// with:
/// - A `KIND` constant holding the kind name and marker
/// - `new()` for trusted ids (panics on invalid input)
/// - `try_new()` and `is_valid()` for checking ids
/// - `parse()` for untrusted `kind-id` strings
/// - `Tag`, `PrefixTag`, `Display`, `FromStr`, and serde implementations
///
/// The `$variant` names the matching [`AnyTag`](crate::tag::AnyTag) variant
/// and `$noun` is used in the panic message.
macro_rules! define_prefixed_tag {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $variant:ident, $noun:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name($crate::prefixed::IdPrefixer);

        impl $name {
            /// Kind name and marker for this tag type.
            pub const KIND: $crate::kind::PrefixedKind = $kind;

            #[doc = concat!("Returns the tag for the ", $noun, " with the given id.")]
            ///
            /// # Panics
            ///
            /// Panics if `id` is not valid. This is for ids that are already
            /// known to be good, such as ones read back from storage; use
            /// `parse` for anything else.
            #[must_use]
            pub fn new(id: &str) -> Self {
                match Self::try_new(id) {
                    Some(tag) => tag,
                    None => panic!("{id:?} is not a valid {} id", $noun),
                }
            }

            /// Returns the tag for `id`, or `None` if the id is not valid.
            #[must_use]
            pub fn try_new(id: &str) -> Option<Self> {
                $crate::prefixed::IdPrefixer::new(id, Self::KIND).map(Self)
            }

            /// Returns true if `id` contains the marker exactly once, ends
            /// in a canonical sequence, and starts with a unit or service
            /// name.
            #[must_use]
            pub fn is_valid(id: &str) -> bool {
                $crate::prefixed::is_valid_prefixed_id(id, Self::KIND.marker)
            }

            /// Parses a full tag string such as the one produced by
            /// `to_string()`.
            ///
            /// # Errors
            ///
            /// Returns `InvalidTag` naming this kind if the string does not
            /// parse, or parses as a different kind of tag.
            pub fn parse(tag: &str) -> $crate::error::Result<Self> {
                match $crate::tag::parse_tag(tag) {
                    Ok($crate::tag::AnyTag::$variant(t)) => Ok(t),
                    Ok(other) => {
                        tracing::debug!(
                            tag,
                            found = $crate::tag::Tag::kind(&other),
                            expected = Self::KIND.kind,
                            "tag kind mismatch"
                        );
                        Err($crate::error::TagError::invalid(tag, Self::KIND.kind))
                    }
                    Err(_) => Err($crate::error::TagError::invalid(tag, Self::KIND.kind)),
                }
            }

            /// The marker token separating owner prefix from sequence.
            #[must_use]
            pub const fn marker(&self) -> &'static str {
                self.0.marker()
            }

            /// Resolves the owner prefix through a caller-supplied resolver.
            #[must_use]
            pub fn prefix_tag_with(
                &self,
                resolver: &$crate::resolve::OwnerResolver,
            ) -> Option<$crate::tag::AnyTag> {
                self.0.prefix_tag_with(resolver)
            }
        }

        impl $crate::tag::Tag for $name {
            fn kind(&self) -> &str {
                $crate::tag::Tag::kind(&self.0)
            }

            fn id(&self) -> &str {
                $crate::tag::Tag::id(&self.0)
            }
        }

        impl $crate::tag::PrefixTag for $name {
            fn prefix(&self) -> &str {
                $crate::tag::PrefixTag::prefix(&self.0)
            }

            fn sequence(&self) -> i64 {
                $crate::tag::PrefixTag::sequence(&self.0)
            }

            fn prefix_tag(&self) -> Option<$crate::tag::AnyTag> {
                $crate::tag::PrefixTag::prefix_tag(&self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::TagError;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                Self::parse(s)
            }
        }

        $crate::macros::impl_tag_serde!($name);
    };
}

pub(crate) use define_prefixed_tag;
pub(crate) use impl_tag_serde;

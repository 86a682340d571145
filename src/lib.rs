//! Typed entity tags whose ids carry an owner prefix and a sequence number.
//!
//! Every tag has a canonical string form `<kind>-<id>`. Action and
//! action-result ids are structured as `<owner><marker><sequence>`:
//!
//! ```
//! use prefixtag::{ActionTag, AnyTag, PrefixTag, Tag, UnitTag};
//!
//! let tag = ActionTag::parse("action-mysql/0_a_7").unwrap();
//! assert_eq!(tag.prefix(), "mysql/0");
//! assert_eq!(tag.sequence(), 7);
//! assert_eq!(tag.prefix_tag(), Some(AnyTag::Unit(UnitTag::new("mysql/0"))));
//! ```
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod action;
pub mod error;
pub mod kind;
mod macros;
pub mod names;
pub mod prefixed;
pub mod resolve;
pub mod split;
pub mod tag;

pub use action::{ActionResultTag, ActionTag, is_valid_action, is_valid_action_result};
pub use error::{Result, TagError};
pub use kind::PrefixedKind;
pub use names::{ServiceTag, UnitTag, is_valid_service, is_valid_unit};
pub use prefixed::{IdPrefixer, is_valid_prefixed_id};
pub use resolve::{OwnerResolver, ResolverStage};
pub use split::{join_id, split_id};
pub use tag::{AnyTag, PrefixTag, Tag, parse_tag};

//! Newtype domain identifiers.
//!
//! A feed item's identity travels over the wire as a UUID string. Wrapping it
//! in [`FeedItemId`] keeps the wire-format rules (canonical hyphenated form
//! only) in one place and stops a raw [`Uuid`] from being used where an item
//! identity is expected.

use serde::Serialize;
use uuid::Uuid;

/// Length of the canonical `8-4-4-4-12` hyphenated UUID text form.
const HYPHENATED_LEN: usize = 36;

/// Identifies a single feed item.
///
/// Assigned by the feed producer; globally unique. Serialises as the lowercase
/// hyphenated string. Wire input is read with [`FeedItemId::parse`], not serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FeedItemId(Uuid);

impl FeedItemId {
    /// Parses an identifier from its wire representation.
    ///
    /// Only the canonical hyphenated form (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`,
    /// either hex case) is accepted. The simple, braced and URN spellings that
    /// [`Uuid::parse_str`] tolerates are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        if value.len() != HYPHENATED_LEN {
            return None;
        }
        Uuid::try_parse(value).ok().map(Self)
    }

    /// Generates a new random identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a [`FeedItemId`] from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for FeedItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

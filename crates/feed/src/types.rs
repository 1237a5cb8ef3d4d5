//! Shared value types for the feed domain.
//!
//! [`FeedItem`] is the decoded domain record handed to callers. [`HttpStatus`]
//! and [`HttpResponse`] are the transport-neutral shapes the
//! [`crate::HttpClient`] port returns; no transport crate types leak past them.

use serde::Serialize;
use url::Url;

use crate::FeedItemId;

// ---------------------------------------------------------------------------
// Feed items
// ---------------------------------------------------------------------------

/// One entry in a remote feed.
///
/// Immutable once built; equality is structural over every field. Instances
/// are normally produced by [`crate::map_feed_items`] from a validated
/// payload. Serialises with the wire key names, omitting absent optionals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FeedItem {
    id: FeedItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(rename = "image")]
    image_url: Url,
}

impl FeedItem {
    /// Creates a new [`FeedItem`].
    pub fn new(
        id: FeedItemId,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }

    /// Returns the item's identity.
    pub fn id(&self) -> FeedItemId {
        self.id
    }

    /// Returns the free-text description, if the producer supplied one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the free-text location, if the producer supplied one.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the absolute URL of the item's image.
    pub fn image_url(&self) -> &Url {
        &self.image_url
    }
}

// ---------------------------------------------------------------------------
// Transport-neutral HTTP shapes
// ---------------------------------------------------------------------------

/// An HTTP response status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HttpStatus(u16);

impl HttpStatus {
    /// `200 OK`, the only status a feed payload is accepted with.
    pub const OK: Self = Self(200);

    /// Creates an [`HttpStatus`] from a raw status code.
    pub fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the raw status code.
    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns `true` for exactly `200 OK`.
    pub fn is_ok(self) -> bool {
        self == Self::OK
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Response status code.
    pub status: HttpStatus,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new [`HttpResponse`].
    pub fn new(status: HttpStatus, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> Url {
        Url::parse("https://a-url.com/image.png").expect("valid URL")
    }

    #[test]
    fn feed_item_serialises_with_wire_keys_and_skips_absent_optionals() {
        let id = FeedItemId::new_random();
        let item = FeedItem::new(id, None, Some("a location".to_owned()), image());

        let json = serde_json::to_value(&item).expect("serialisable");

        assert_eq!(
            json,
            serde_json::json!({
                "id": id.to_string(),
                "location": "a location",
                "image": "https://a-url.com/image.png",
            })
        );
    }

    #[test]
    fn feed_item_equality_is_structural() {
        let id = FeedItemId::new_random();
        let a = FeedItem::new(id, Some("d".to_owned()), None, image());
        let b = FeedItem::new(id, Some("d".to_owned()), None, image());
        let c = FeedItem::new(id, Some("other".to_owned()), None, image());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn only_200_is_ok() {
        assert!(HttpStatus::new(200).is_ok());
        assert!(!HttpStatus::new(204).is_ok());
        assert!(!HttpStatus::new(199).is_ok());
    }
}

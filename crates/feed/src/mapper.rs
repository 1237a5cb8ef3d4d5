//! Decoding of raw feed responses into [`FeedItem`]s.
//!
//! The payload is decoded into transport DTOs first, then mapped into domain
//! records in one pass. Validation is all-or-nothing: one bad item fails the
//! whole response.

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::{FeedError, FeedItem, FeedItemId, HttpStatus};

#[derive(Debug, Deserialize)]
struct FeedPayloadDto {
    items: Vec<FeedItemDto>,
}

// `Option` fields decode both an absent key and an explicit `null` as `None`.
#[derive(Debug, Deserialize)]
struct FeedItemDto {
    id: String,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl FeedPayloadDto {
    fn into_domain_items(self) -> Result<Vec<FeedItem>, FeedError> {
        self.items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_domain_item(index))
            .collect()
    }
}

impl FeedItemDto {
    fn into_domain_item(self, index: usize) -> Result<FeedItem, FeedError> {
        let Some(id) = FeedItemId::parse(&self.id) else {
            debug!(index, id = %self.id, "feed item id is not a canonical UUID");
            return Err(FeedError::InvalidData);
        };
        Ok(FeedItem::new(id, self.description, self.location, self.image))
    }
}

/// Maps a raw HTTP response into the feed items it carries.
///
/// Fails with [`FeedError::InvalidData`] when `status` is anything but `200`
/// (the body is not inspected), when `body` is not a JSON object with an
/// `"items"` array, or when any item lacks a canonical UUID `id` or an
/// absolute `image` URL. Item order is preserved; an empty array is a success.
pub fn map_feed_items(body: &[u8], status: HttpStatus) -> Result<Vec<FeedItem>, FeedError> {
    if !status.is_ok() {
        debug!(%status, "rejecting feed response with non-200 status");
        return Err(FeedError::InvalidData);
    }

    let payload: FeedPayloadDto = serde_json::from_slice(body).map_err(|error| {
        debug!(%error, "feed payload does not match the expected shape");
        FeedError::InvalidData
    })?;
    payload.into_domain_items()
}

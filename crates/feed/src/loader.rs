//! Feed loading: the [`FeedLoader`] port and its HTTP-backed implementation.
//!
//! [`RemoteFeedLoader`] composes an [`HttpClient`] with [`map_feed_items`].
//! It keeps no per-call state: every load is an independent request whose
//! result is delivered exactly once.

use std::sync::{Arc, Weak};

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn, Instrument};
use url::Url;

use crate::{map_feed_items, FeedError, FeedItem, HttpClient, HttpClientResult};

/// Outcome of a feed load.
pub type LoadFeedResult = Result<Vec<FeedItem>, FeedError>;

/// Something that can load the current feed.
#[async_trait]
pub trait FeedLoader: Send + Sync {
    /// Loads the feed once.
    ///
    /// Resolves to the full item list or a [`FeedError`]; never a partial list.
    async fn load(&self) -> LoadFeedResult;
}

/// Loads a feed from a fixed URL through a shared [`HttpClient`].
///
/// Construction performs no network activity. The loader holds a shared
/// handle to the client but does not own its lifetime.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    // Callback deliveries hold only a `Weak` to this; once the loader is
    // dropped they are suppressed.
    liveness: Arc<()>,
}

impl RemoteFeedLoader {
    /// Creates a loader for `url` backed by `client`.
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            liveness: Arc::new(()),
        }
    }

    /// Returns the URL every load requests.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Loads the feed and hands the result to `completion`.
    ///
    /// The request is issued before this returns; the response is awaited on
    /// a Tokio task. `completion` runs exactly once when the transport
    /// resolves, unless this loader has been dropped by then, in which case it
    /// is never called.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn load_with<F>(&self, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(LoadFeedResult) + Send + 'static,
    {
        let request = self.client.get(&self.url);
        let liveness: Weak<()> = Arc::downgrade(&self.liveness);
        let span = tracing::debug_span!("feed.load_with", url = %self.url);

        tokio::spawn(
            async move {
                let response = request.await;
                let Some(_alive) = liveness.upgrade() else {
                    debug!("loader dropped before the transport resolved; discarding result");
                    return;
                };
                completion(into_load_result(response));
            }
            .instrument(span),
        )
    }
}

#[async_trait]
impl FeedLoader for RemoteFeedLoader {
    #[instrument(name = "feed.load", skip(self), fields(url = %self.url))]
    async fn load(&self) -> LoadFeedResult {
        let response = self.client.get(&self.url).await;
        into_load_result(response)
    }
}

impl std::fmt::Debug for RemoteFeedLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteFeedLoader")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

fn into_load_result(response: HttpClientResult) -> LoadFeedResult {
    match response {
        Ok(response) => {
            let items = map_feed_items(&response.body, response.status)?;
            debug!(count = items.len(), "feed loaded");
            Ok(items)
        }
        Err(error) => {
            warn!(%error, "feed transport failed");
            Err(error.into())
        }
    }
}

//! The JSON document `feedctl` prints on success.

use anyhow::Context;
use chrono::{DateTime, Utc};
use feed::{FeedItem, FeedLoader};
use serde::Serialize;
use tracing::info;
use url::Url;

/// Items from one successful load plus where and when they were fetched.
#[derive(Debug, Serialize)]
pub struct FeedReport {
    pub url: Url,
    pub fetched_at: DateTime<Utc>,
    pub items: Vec<FeedItem>,
}

/// Loads the feed once through `loader` and wraps the items in a report.
///
/// # Errors
///
/// Fails with the loader's [`feed::FeedError`] as the root cause.
pub async fn load_report(loader: &dyn FeedLoader, url: &Url) -> anyhow::Result<FeedReport> {
    let items = loader
        .load()
        .await
        .with_context(|| format!("failed to load feed from {url}"))?;
    info!(count = items.len(), "feed loaded");

    Ok(FeedReport {
        url: url.clone(),
        fetched_at: Utc::now(),
        items,
    })
}

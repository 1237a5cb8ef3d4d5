//! Feed domain: item model, transport port, payload mapping, and loading.
//!
//! This crate defines *what* a feed is and how a raw HTTP response becomes
//! one. It performs no I/O of its own: the network is reached only through the
//! [`HttpClient`] trait, which infrastructure crates implement.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** Transport crates implement
//! [`HttpClient`]; callers depend on [`FeedLoader`].
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | `FeedItemId` newtype |
//! | [`types`] | `FeedItem`, `HttpStatus`, `HttpResponse` |
//! | [`errors`] | `FeedError` taxonomy and `HttpClientError` |
//! | [`http_client`] | The `HttpClient` transport port |
//! | [`mapper`] | Status and payload validation, JSON to `FeedItem` |
//! | [`loader`] | `FeedLoader` port and `RemoteFeedLoader` |
//!
//! ## Example
//!
//! ```no_run
//! # async fn run(client: std::sync::Arc<dyn feed::HttpClient>) {
//! use feed::{FeedLoader, RemoteFeedLoader};
//!
//! let url = url::Url::parse("https://example.com/feed").unwrap();
//! let loader = RemoteFeedLoader::new(url, client);
//! match loader.load().await {
//!     Ok(items) => println!("{} items", items.len()),
//!     Err(error) => eprintln!("{error}"),
//! }
//! # }
//! ```

pub mod errors;
pub mod http_client;
pub mod identifiers;
pub mod loader;
pub mod mapper;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{FeedError, HttpClientError};
pub use http_client::{HttpClient, HttpClientResult};
pub use identifiers::FeedItemId;
pub use loader::{FeedLoader, LoadFeedResult, RemoteFeedLoader};
pub use mapper::map_feed_items;
pub use types::{FeedItem, HttpResponse, HttpStatus};

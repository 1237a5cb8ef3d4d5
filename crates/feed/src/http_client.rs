//! The HTTP transport port.
//!
//! The feed domain never performs I/O itself. It asks an [`HttpClient`] for the
//! bytes behind a URL and judges the result. Infrastructure crates (e.g.
//! `feed-http`) implement this trait; tests substitute a spy.

use futures::future::BoxFuture;
use url::Url;

use crate::{HttpClientError, HttpResponse};

/// Outcome of a single [`HttpClient::get`] call.
pub type HttpClientResult = Result<HttpResponse, HttpClientError>;

/// Capability to fetch a URL over HTTP.
///
/// ## Contract
///
/// - Calling [`get`](Self::get) issues the request; network implementations
///   may defer the actual send until the future is first polled. The returned
///   future is `'static` so it can outlive the borrow of the client and be
///   driven elsewhere (see [`crate::RemoteFeedLoader::load_with`]).
/// - The future resolves to exactly one [`HttpClientResult`]. Dropping it
///   before completion discards the result; nothing is delivered afterwards.
/// - Any status code is a successful exchange at this layer. Judging the status
///   is the caller's job.
/// - No ordering is promised between the completions of concurrent calls.
pub trait HttpClient: Send + Sync {
    /// Issues a `GET` request to `url`.
    fn get(&self, url: &Url) -> BoxFuture<'static, HttpClientResult>;
}

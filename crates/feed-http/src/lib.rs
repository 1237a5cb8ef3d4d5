//! HTTP transport adapter for the feed domain.
//!
//! Implements the [`feed::HttpClient`] trait over `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Connection pooling, TLS, timeouts and body buffering
//! live here. The [`feed`] crate sees only [`feed::HttpClient`] and the
//! transport-neutral [`feed::HttpResponse`].
//!
//! ## Status codes
//!
//! Every status code is returned to the caller unchanged. Judging whether a
//! `404` or `500` is acceptable belongs to the feed mapper, not the transport.

mod client;
mod config;

pub use client::{ClientBuildError, ReqwestHttpClient};
pub use config::HttpClientConfig;

//! Error types for the feed domain.
//!
//! [`FeedError`] is the closed taxonomy callers of a feed loader see.
//! [`HttpClientError`] is what an [`crate::HttpClient`] implementation reports;
//! it is normalised into [`FeedError::Connectivity`] at the loader boundary and
//! never reaches the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Loader-facing errors
// ---------------------------------------------------------------------------

/// Why a feed load failed.
///
/// Exactly two kinds exist. A failed load is never retried by the loader; the
/// caller decides whether to load again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedError {
    /// The transport call itself failed (network, DNS, TLS, body read, ...).
    #[error("Connectivity error: the feed could not be fetched")]
    Connectivity,

    /// The transport succeeded but the response failed validation.
    ///
    /// Produced by: non-200 status, malformed JSON, wrong payload shape, or any
    /// single item with a missing or malformed required field.
    #[error("Invalid data: the feed response failed validation")]
    InvalidData,
}

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Failure reported by an [`crate::HttpClient`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The request could not be sent or its body could not be read.
    #[error("Transport failure: {message}")]
    Transport {
        /// Human-readable description of the underlying failure.
        message: String,
    },

    /// The transport finished with neither a response nor an error.
    #[error("Transport completed without a response")]
    NoResponse,
}

impl HttpClientError {
    /// Creates a [`HttpClientError::Transport`] from any displayable cause.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

impl From<HttpClientError> for FeedError {
    fn from(_: HttpClientError) -> Self {
        Self::Connectivity
    }
}

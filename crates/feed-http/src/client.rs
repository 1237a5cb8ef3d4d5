//! `reqwest`-backed [`HttpClient`].

use feed::{HttpClient, HttpClientError, HttpClientResult, HttpResponse, HttpStatus};
use futures::future::BoxFuture;
use thiserror::Error;
use tracing::{debug, Instrument};
use url::Url;

use crate::HttpClientConfig;

/// The underlying `reqwest` client could not be constructed.
///
/// Typically a TLS backend initialisation failure.
#[derive(Debug, Error)]
#[error("Failed to build HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// [`HttpClient`] that performs real network requests.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Builds a client applying `config` to every request.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &HttpClientConfig) -> Result<Self, ClientBuildError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest` client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url) -> BoxFuture<'static, HttpClientResult> {
        let request = self.client.get(url.clone());
        let span = tracing::debug_span!("http.get", url = %url);
        Box::pin(send(request).instrument(span))
    }
}

async fn send(request: reqwest::RequestBuilder) -> HttpClientResult {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = HttpStatus::new(response.status().as_u16());
    let body = response.bytes().await.map_err(map_transport_error)?;
    debug!(%status, bytes = body.len(), "response received");
    Ok(HttpResponse::new(status, body.to_vec()))
}

fn map_transport_error(error: reqwest::Error) -> HttpClientError {
    debug!(%error, timeout = error.is_timeout(), connect = error.is_connect(), "request failed");
    HttpClientError::transport(error.to_string())
}

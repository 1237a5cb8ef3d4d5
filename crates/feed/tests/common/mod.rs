//! Shared test doubles and fixtures for loader tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use feed::{
    FeedItem, FeedItemId, HttpClient, HttpClientError, HttpClientResult, HttpResponse, HttpStatus,
    RemoteFeedLoader,
};
use futures::future::BoxFuture;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use url::Url;

pub const FEED_URL: &str = "https://example.com/feed";

struct Message {
    url: Url,
    completion: Option<oneshot::Sender<HttpClientResult>>,
}

/// Records every request and lets the test resolve each one by index.
#[derive(Default)]
pub struct HttpClientSpy {
    messages: Mutex<Vec<Message>>,
}

impl HttpClientSpy {
    pub fn requested_urls(&self) -> Vec<Url> {
        self.lock().iter().map(|m| m.url.clone()).collect()
    }

    pub fn request_count(&self) -> usize {
        self.lock().len()
    }

    /// Yields until at least `count` requests have been issued.
    pub async fn wait_for_requests(&self, count: usize) {
        while self.request_count() < count {
            tokio::task::yield_now().await;
        }
    }

    pub fn complete_with_error(&self, error: HttpClientError, index: usize) {
        self.resolve(index, Err(error));
    }

    pub fn complete_with_status(&self, code: u16, body: Vec<u8>, index: usize) {
        self.resolve(index, Ok(HttpResponse::new(HttpStatus::new(code), body)));
    }

    fn resolve(&self, index: usize, result: HttpClientResult) {
        let sender = self.lock()[index]
            .completion
            .take()
            .expect("request already completed");
        // The receiving side is gone when the load future was dropped.
        let _ = sender.send(result);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Message>> {
        self.messages.lock().expect("spy mutex poisoned")
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url) -> BoxFuture<'static, HttpClientResult> {
        let (sender, receiver) = oneshot::channel();
        self.lock().push(Message {
            url: url.clone(),
            completion: Some(sender),
        });
        Box::pin(async move { receiver.await.unwrap_or(Err(HttpClientError::NoResponse)) })
    }
}

pub fn feed_url() -> Url {
    Url::parse(FEED_URL).expect("valid fixture URL")
}

pub fn make_sut() -> (RemoteFeedLoader, Arc<HttpClientSpy>) {
    let client = Arc::new(HttpClientSpy::default());
    let sut = RemoteFeedLoader::new(feed_url(), client.clone());
    (sut, client)
}

pub fn make_items_json(items: Vec<Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({ "items": items })).expect("serialisable JSON")
}

/// Builds a model item and its wire JSON, omitting absent optionals.
pub fn make_item(
    description: Option<&str>,
    location: Option<&str>,
    image_url: &str,
) -> (FeedItem, Value) {
    let id = FeedItemId::new_random();
    let image_url = Url::parse(image_url).expect("valid fixture URL");
    let model = FeedItem::new(
        id,
        description.map(str::to_owned),
        location.map(str::to_owned),
        image_url.clone(),
    );

    let mut json = json!({ "id": id.to_string(), "image": image_url.as_str() });
    if let Some(description) = description {
        json["description"] = json!(description);
    }
    if let Some(location) = location {
        json["location"] = json!(location);
    }
    (model, json)
}

pub fn transport_error() -> HttpClientError {
    HttpClientError::transport("connection refused")
}

//! In-memory transport for tests and offline development.
//!
//! Replies come either from a FIFO queue or from a handler closure that
//! inspects each request. Every request is recorded so callers can assert
//! on what would have been sent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use super::{JsonRequest, JsonResponse, JsonTransport, TransportError};

type Reply = Result<JsonResponse, TransportError>;
type Handler = dyn Fn(&JsonRequest) -> Reply + Send + Sync;

/// Transport that never touches the network.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    handler: Option<Arc<Handler>>,
    requests: Arc<Mutex<Vec<JsonRequest>>>,
}

impl MockTransport {
    /// Create a mock with an empty reply queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers every request with `handler`.
    ///
    /// Useful when requests may be issued concurrently and queue order
    /// cannot be relied on.
    pub fn with_handler(
        handler: impl Fn(&JsonRequest) -> Reply + Send + Sync + 'static,
    ) -> Self {
        Self {
            handler: Some(Arc::new(handler)),
            ..Self::default()
        }
    }

    /// Queue a reply for the next unanswered request.
    pub fn push_reply(&self, reply: Reply) -> &Self {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
        self
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push_reply(Ok(JsonResponse::new(status, body)))
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<JsonRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl JsonTransport for MockTransport {
    async fn send(&self, request: JsonRequest) -> Result<JsonResponse, TransportError> {
        let reply = match &self.handler {
            Some(handler) => handler(&request),
            None => self
                .replies
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .unwrap_or_else(|| {
                    Err(TransportError::Network(format!(
                        "no mock reply queued for {}",
                        request.url
                    )))
                }),
        };

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        reply
    }
}

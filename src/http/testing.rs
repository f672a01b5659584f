//! Scripted in-memory transport for unit tests.

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError, TransportFuture};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn push_json(&self, status: u16, body: &str) {
        self.push(Ok(HttpResponse::new(status, body.as_bytes().to_vec())));
    }

    pub(crate) fn push(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for ScriptedTransport {
    fn execute<'a>(&'a self, request: HttpRequest) -> TransportFuture<'a> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())));
        Box::pin(async move { next })
    }
}

/// A transport whose exchanges never complete.
pub(crate) struct StalledTransport;

impl Transport for StalledTransport {
    fn execute<'a>(&'a self, _request: HttpRequest) -> TransportFuture<'a> {
        Box::pin(std::future::pending())
    }
}

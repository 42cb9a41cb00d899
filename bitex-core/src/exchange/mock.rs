// Test double that records which query path every call took

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use super::{ExchangeError, QueryOptions, Transport, Verb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPath {
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub path: QueryPath,
    pub verb: Verb,
    pub endpoint: String,
    pub options: QueryOptions,
}

#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    delay: Option<Duration>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every query sleeps for `delay` before answering
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            delay: Some(delay),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(
        &self,
        path: QueryPath,
        verb: Verb,
        endpoint: &str,
        options: QueryOptions,
    ) -> Result<RecordedCall, ExchangeError> {
        let call = RecordedCall {
            path,
            verb,
            endpoint: endpoint.to_string(),
            options,
        };
        self.calls.lock().unwrap().push(call.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(call)
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    type Response = RecordedCall;

    async fn public_query(
        &self,
        verb: Verb,
        endpoint: &str,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        self.record(QueryPath::Public, verb, endpoint, options).await
    }

    async fn private_query(
        &self,
        verb: Verb,
        endpoint: &str,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        self.record(QueryPath::Private, verb, endpoint, options).await
    }
}

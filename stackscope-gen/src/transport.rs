//! Transport seam for the generation endpoint.

use crate::types::GenerateContentRequest;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use stackscope_core::TransientError;

/// One request/response exchange with the generation endpoint.
///
/// Returns the raw response body on a 2xx status. Network failures and
/// non-success statuses map onto [`TransientError`]; classifying and
/// retrying them is the client's job, not the transport's.
#[async_trait]
pub trait GenerateTransport: Send + Sync {
    async fn send(&self, request: &GenerateContentRequest) -> Result<String, TransientError>;
}

/// HTTPS transport. The API key travels as a query parameter on every call.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl GenerateTransport for HttpTransport {
    async fn send(&self, request: &GenerateContentRequest) -> Result<String, TransientError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| TransientError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransientError::Status {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| TransientError::Transport {
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Scripted transport for testing. Pops one canned outcome per call, in
/// order, and counts the calls made.
#[derive(Debug)]
pub struct MockTransport {
    script: Mutex<VecDeque<Result<String, TransientError>>>,
    calls: AtomicU32,
}

impl MockTransport {
    pub fn new(script: Vec<Result<String, TransientError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicU32::new(0),
        }
    }

    /// How many times `send` has been invoked.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl GenerateTransport for MockTransport {
    async fn send(&self, _request: &GenerateContentRequest) -> Result<String, TransientError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());
        next.unwrap_or_else(|| {
            Err(TransientError::Transport {
                reason: "mock script exhausted".to_string(),
            })
        })
    }
}

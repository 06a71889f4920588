//! Resilient generation client: retry driver and in-flight guard.

use crate::backoff;
use crate::transport::{GenerateTransport, HttpTransport};
use crate::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use stackscope_core::{GenError, ParseStage, TransientError, ValueCard};

/// Fixed system instruction defining the output contract.
pub const SYSTEM_INSTRUCTION: &str = "You are a Business Strategy Consultant. \
Given a company/industry, generate 4 strategic ROI values for a semantic LLM \
system. Return JSON as a list of 4 objects with: title, desc, metric.";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Sleep abstraction so backoff timing is testable without real waits.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Endpoint and retry settings for [`GenerationClient::new`].
#[derive(Debug, Clone)]
pub struct GenSettings {
    pub base_url: String,
    pub model: String,
    /// `None` means no credential is configured: every `generate` call fails
    /// immediately with [`GenError::MissingCredential`].
    pub api_key: Option<String>,
    pub request_timeout: Duration,
    pub max_attempts: u32,
    pub initial_backoff: Duration,
}

impl Default for GenSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(30),
            max_attempts: 5,
            initial_backoff: Duration::from_millis(1000),
        }
    }
}

/// Client for the generative-text endpoint.
///
/// Owns nothing but the call itself: results are returned to the caller,
/// which decides where they are stored and what the fallback is.
pub struct GenerationClient {
    transport: Option<Arc<dyn GenerateTransport>>,
    sleeper: Arc<dyn Sleeper>,
    max_attempts: u32,
    initial_backoff: Duration,
    in_flight: AtomicBool,
}

impl GenerationClient {
    /// Build a client from settings. An absent or empty API key yields a
    /// client without a transport; the credential error is reported at call
    /// time, matching when the caller can react to it.
    pub fn new(settings: &GenSettings) -> Result<Self, reqwest::Error> {
        let transport: Option<Arc<dyn GenerateTransport>> = match settings.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Some(Arc::new(HttpTransport::new(
                &settings.base_url,
                &settings.model,
                key,
                settings.request_timeout,
            )?)),
            _ => None,
        };
        Ok(Self::with_parts(
            transport,
            Arc::new(TokioSleeper),
            settings.max_attempts,
            settings.initial_backoff,
        ))
    }

    /// Assemble a client from explicit parts. Used by tests to inject a
    /// scripted transport and a recording sleeper.
    pub fn with_parts(
        transport: Option<Arc<dyn GenerateTransport>>,
        sleeper: Arc<dyn Sleeper>,
        max_attempts: u32,
        initial_backoff: Duration,
    ) -> Self {
        Self {
            transport,
            sleeper,
            max_attempts: max_attempts.max(1),
            initial_backoff,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a `generate` call is currently outstanding. The presentation
    /// layer reads this to disable duplicate submissions.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Ask the endpoint for value cards about `subject`.
    ///
    /// Up to `max_attempts` tries, sleeping per the doubling backoff schedule
    /// between failures. The parsed payload is returned verbatim: list length
    /// is not validated beyond parse success, so a payload of three records
    /// passes through unchanged.
    pub async fn generate(&self, subject: &str) -> Result<Vec<ValueCard>, GenError> {
        let transport = self
            .transport
            .as_ref()
            .ok_or(GenError::MissingCredential)?;
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(GenError::InFlight)?;

        let request = GenerateContentRequest::new(subject, SYSTEM_INSTRUCTION);
        let delays = backoff::schedule(self.max_attempts, self.initial_backoff);

        let mut attempt = 1;
        loop {
            match Self::attempt(transport.as_ref(), &request).await {
                Ok(cards) => return Ok(cards),
                Err(cause) if attempt >= self.max_attempts => {
                    return Err(GenError::Exhausted {
                        attempts: self.max_attempts,
                        cause,
                    });
                }
                Err(_) => {
                    self.sleeper.sleep(delays[attempt as usize - 1]).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One attempt: send, decode the envelope, decode the inner payload.
    /// Every failure mode here is retryable.
    async fn attempt(
        transport: &dyn GenerateTransport,
        request: &GenerateContentRequest,
    ) -> Result<Vec<ValueCard>, TransientError> {
        let body = transport.send(request).await?;
        let envelope: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| TransientError::Parse {
                stage: ParseStage::Envelope,
                reason: e.to_string(),
            })?;
        let text = envelope.first_text().ok_or_else(|| TransientError::Parse {
            stage: ParseStage::Envelope,
            reason: "no candidate text part".to_string(),
        })?;
        serde_json::from_str::<Vec<ValueCard>>(text).map_err(|e| TransientError::Parse {
            stage: ParseStage::Payload,
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("configured", &self.transport.is_some())
            .field("max_attempts", &self.max_attempts)
            .field("initial_backoff", &self.initial_backoff)
            .field("in_flight", &self.is_in_flight())
            .finish()
    }
}

/// RAII guard for the in-flight flag: set on acquire, cleared on drop, so
/// both success and failure paths release it.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use std::sync::Mutex;

    /// Records requested delays instead of sleeping.
    #[derive(Default)]
    struct RecordingSleeper {
        delays: Mutex<Vec<Duration>>,
    }

    impl RecordingSleeper {
        fn recorded(&self) -> Vec<Duration> {
            self.delays.lock().expect("sleeper lock").clone()
        }
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.delays.lock().expect("sleeper lock").push(duration);
        }
    }

    fn envelope(payload: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": payload }] } }]
        })
        .to_string()
    }

    fn four_card_payload() -> String {
        serde_json::json!([
            { "title": "Local Loyalty", "desc": "a", "metric": "+12% repeat visits" },
            { "title": "Waste Reduction", "desc": "b", "metric": "-18% spoilage" },
            { "title": "Staff Efficiency", "desc": "c", "metric": "30% fewer queries" },
            { "title": "Seasonal Agility", "desc": "d", "metric": "Same-day menu updates" }
        ])
        .to_string()
    }

    fn client_with(
        script: Vec<Result<String, TransientError>>,
    ) -> (GenerationClient, Arc<MockTransport>, Arc<RecordingSleeper>) {
        let transport = Arc::new(MockTransport::new(script));
        let sleeper = Arc::new(RecordingSleeper::default());
        let client = GenerationClient::with_parts(
            Some(transport.clone()),
            sleeper.clone(),
            5,
            Duration::from_millis(1000),
        );
        (client, transport, sleeper)
    }

    fn http_500() -> Result<String, TransientError> {
        Err(TransientError::Status { status: 500 })
    }

    #[tokio::test]
    async fn test_success_on_first_attempt_no_retries() {
        let (client, transport, sleeper) = client_with(vec![Ok(envelope(&four_card_payload()))]);

        let cards = client.generate("a regional bakery chain").await.unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Local Loyalty");
        assert_eq!(transport.calls(), 1);
        assert!(sleeper.recorded().is_empty());
        assert!(!client.is_in_flight());
    }

    #[tokio::test]
    async fn test_four_failures_then_success_with_full_backoff() {
        let (client, transport, sleeper) = client_with(vec![
            http_500(),
            http_500(),
            http_500(),
            http_500(),
            Ok(envelope(&four_card_payload())),
        ]);

        let cards = client.generate("a freight operator").await.unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(transport.calls(), 5);
        assert_eq!(
            sleeper.recorded(),
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
            ]
        );
    }

    #[tokio::test]
    async fn test_exhaustion_after_five_attempts() {
        let (client, transport, sleeper) =
            client_with(vec![http_500(), http_500(), http_500(), http_500(), http_500()]);

        let err = client.generate("anything").await.unwrap_err();
        assert_eq!(
            err,
            GenError::Exhausted {
                attempts: 5,
                cause: TransientError::Status { status: 500 },
            }
        );
        assert_eq!(transport.calls(), 5);
        assert_eq!(sleeper.recorded().len(), 4);
        assert!(!client.is_in_flight());
    }

    #[tokio::test]
    async fn test_exhaustion_carries_last_cause() {
        let (client, _, _) = client_with(vec![
            http_500(),
            http_500(),
            http_500(),
            http_500(),
            Err(TransientError::Transport {
                reason: "connection reset".to_string(),
            }),
        ]);

        match client.generate("anything").await.unwrap_err() {
            GenError::Exhausted { attempts, cause } => {
                assert_eq!(attempts, 5);
                assert_eq!(
                    cause,
                    TransientError::Transport {
                        reason: "connection reset".to_string(),
                    }
                );
            }
            other => panic!("expected Exhausted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_attempts() {
        let sleeper = Arc::new(RecordingSleeper::default());
        let client =
            GenerationClient::with_parts(None, sleeper.clone(), 5, Duration::from_millis(1000));

        let err = client.generate("anything").await.unwrap_err();
        assert_eq!(err, GenError::MissingCredential);
        assert!(sleeper.recorded().is_empty());
        assert!(!client.is_in_flight());
    }

    #[tokio::test]
    async fn test_malformed_envelope_is_retryable() {
        let (client, transport, _) = client_with(vec![
            Ok("not json at all".to_string()),
            Ok(envelope(&four_card_payload())),
        ]);

        let cards = client.generate("anything").await.unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_missing_candidate_text_is_retryable() {
        let (client, transport, _) = client_with(vec![
            Ok(r#"{"candidates":[]}"#.to_string()),
            Ok(envelope(&four_card_payload())),
        ]);

        let cards = client.generate("anything").await.unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_unparseable_payload_exhausts_as_payload_parse_error() {
        let bad = envelope("{\"title\": \"not a list\"}");
        let (client, _, _) = client_with(vec![
            Ok(bad.clone()),
            Ok(bad.clone()),
            Ok(bad.clone()),
            Ok(bad.clone()),
            Ok(bad),
        ]);

        match client.generate("anything").await.unwrap_err() {
            GenError::Exhausted { cause, .. } => match cause {
                TransientError::Parse { stage, .. } => assert_eq!(stage, ParseStage::Payload),
                other => panic!("expected Parse, got {:?}", other),
            },
            other => panic!("expected Exhausted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_short_payload_passes_through_verbatim() {
        // Three records instead of four: the contract is parse success only,
        // so the list is returned unchanged, not truncated or padded.
        let payload = serde_json::json!([
            { "title": "A", "desc": "a", "metric": "1" },
            { "title": "B", "desc": "b", "metric": "2" },
            { "title": "C", "desc": "c", "metric": "3" }
        ])
        .to_string();
        let (client, _, _) = client_with(vec![Ok(envelope(&payload))]);

        let cards = client.generate("anything").await.unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].title, "C");
    }

    #[tokio::test]
    async fn test_concurrent_generate_rejected_while_in_flight() {
        use tokio::sync::Notify;

        /// Blocks until released, so a first call can be held in flight.
        struct BlockingTransport {
            release: Arc<Notify>,
            body: String,
        }

        #[async_trait]
        impl GenerateTransport for BlockingTransport {
            async fn send(
                &self,
                _request: &GenerateContentRequest,
            ) -> Result<String, TransientError> {
                self.release.notified().await;
                Ok(self.body.clone())
            }
        }

        let release = Arc::new(Notify::new());
        let transport = Arc::new(BlockingTransport {
            release: release.clone(),
            body: envelope(&four_card_payload()),
        });
        let client = Arc::new(GenerationClient::with_parts(
            Some(transport),
            Arc::new(RecordingSleeper::default()),
            5,
            Duration::from_millis(1000),
        ));

        let first = tokio::spawn({
            let client = client.clone();
            async move { client.generate("first").await }
        });

        // Let the first call reach the transport and park.
        while !client.is_in_flight() {
            tokio::task::yield_now().await;
        }

        let err = client.generate("second").await.unwrap_err();
        assert_eq!(err, GenError::InFlight);

        release.notify_one();
        let cards = first.await.unwrap().unwrap();
        assert_eq!(cards.len(), 4);
        assert!(!client.is_in_flight());
    }
}

//! Stackscope Gen - Resilient Generation Client
//!
//! A single-call client for a remote generative-text endpoint: structured
//! (JSON) output, exponential backoff retry, strict two-stage response
//! decoding. The transport and the sleep timer are traits so the retry
//! behavior is testable without a network or real waits.

pub mod backoff;
pub mod client;
pub mod transport;
pub mod types;

pub use client::{
    GenSettings, GenerationClient, Sleeper, TokioSleeper, DEFAULT_BASE_URL, DEFAULT_MODEL,
    SYSTEM_INSTRUCTION,
};
pub use transport::{GenerateTransport, HttpTransport, MockTransport};

//! Error types for stackscope operations

use std::fmt;
use thiserror::Error;

/// Stage at which decoding a generation response failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    /// The outer JSON envelope returned by the endpoint.
    Envelope,
    /// The inner JSON document carried in the first candidate's text part.
    Payload,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStage::Envelope => write!(f, "envelope"),
            ParseStage::Payload => write!(f, "payload"),
        }
    }
}

/// Failures the generation client recovers from by retrying with backoff.
/// Never surfaced to callers directly; the last one is carried inside
/// [`GenError::Exhausted`] once the attempt budget runs out.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransientError {
    #[error("Transport failure: {reason}")]
    Transport { reason: String },

    #[error("Endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to parse {stage} JSON: {reason}")]
    Parse { stage: ParseStage, reason: String },
}

/// Terminal generation failures surfaced to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenError {
    /// No API key configured. Surfaced before any network attempt, never
    /// retried.
    #[error("No API key configured for the generation endpoint")]
    MissingCredential,

    /// A generation request is already outstanding. Callers are expected to
    /// disable the triggering action while one is in flight, so hitting this
    /// is a caller bug rather than an operational failure.
    #[error("A generation request is already in flight")]
    InFlight,

    /// Every attempt failed. Carries the cause of the final attempt; the
    /// caller falls back to the default card set.
    #[error("Generation failed after {attempts} attempts: {cause}")]
    Exhausted { attempts: u32, cause: TransientError },
}

/// Navigation requests outside the closed catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavError {
    /// The slug names no known page, layer, or resource group. The view
    /// state is left unchanged. Validated inputs never produce this.
    #[error("Unknown navigation target: {slug}")]
    InvalidTarget { slug: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_error_display() {
        let err = TransientError::Status { status: 500 };
        assert!(format!("{}", err).contains("500"));

        let err = TransientError::Parse {
            stage: ParseStage::Payload,
            reason: "expected value".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("payload"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_gen_error_display_exhausted() {
        let err = GenError::Exhausted {
            attempts: 5,
            cause: TransientError::Transport {
                reason: "connection refused".to_string(),
            },
        };
        let msg = format!("{}", err);
        assert!(msg.contains("5 attempts"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_nav_error_display() {
        let err = NavError::InvalidTarget {
            slug: "warp-core".to_string(),
        };
        assert!(format!("{}", err).contains("warp-core"));
    }
}

//! Pure backoff schedule computation.
//!
//! Kept separate from the retry driver so the timing policy is testable
//! without sleeping.

use std::time::Duration;

/// Delays inserted between attempts: `initial` before the second attempt,
/// doubling after every subsequent failure. No jitter and no cap; the
/// attempt ceiling bounds the total wait.
///
/// Returns `max_attempts - 1` entries (one delay per retry).
pub fn schedule(max_attempts: u32, initial: Duration) -> Vec<Duration> {
    let mut delays = Vec::new();
    let mut delay = initial;
    for _ in 1..max_attempts {
        delays.push(delay);
        delay *= 2;
    }
    delays
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_1_2_4_8_seconds() {
        let delays = schedule(5, Duration::from_millis(1000));
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
            ]
        );
    }

    #[test]
    fn test_single_attempt_has_no_delays() {
        assert!(schedule(1, Duration::from_secs(1)).is_empty());
        assert!(schedule(0, Duration::from_secs(1)).is_empty());
    }
}

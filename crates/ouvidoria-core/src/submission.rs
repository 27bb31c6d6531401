//! Complaint submission.
//!
//! There is no backend yet. [`SimulatedSubmitter`] stands in for the HTTP
//! call: it waits a fixed delay and hands back a protocol number. The sleep
//! function is injected so the same code runs on browser timers and on
//! tokio's clock in tests.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use crate::draft::ComplaintDraft;
use crate::error::SubmitError;

/// Number of digits in the random part of a protocol
const PROTOCOL_SUFFIX_MODULUS: u16 = 10_000;

/// Receipt number shown to the user, rendered `#<year><4 digits>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Protocol {
    year: i32,
    suffix: u16,
}

impl Protocol {
    pub fn new(year: i32, suffix: u16) -> Self {
        Self {
            year,
            suffix: suffix % PROTOCOL_SUFFIX_MODULUS,
        }
    }

    /// Random protocol for `year`.
    pub fn generate<R: Rng>(year: i32, rng: &mut R) -> Self {
        Self::new(year, rng.random_range(0..PROTOCOL_SUFFIX_MODULUS))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn suffix(&self) -> u16 {
        self.suffix
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}{:04}", self.year, self.suffix)
    }
}

/// Proof that a complaint was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub protocol: Protocol,
    pub submitted_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(protocol: Protocol) -> Self {
        Self {
            protocol,
            submitted_at: Utc::now(),
        }
    }
}

/// Delivers a finished draft somewhere.
pub trait Submitter {
    fn submit(
        &self,
        draft: &ComplaintDraft,
    ) -> impl Future<Output = Result<Receipt, SubmitError>>;
}

/// Placeholder backend: sleeps, then accepts everything.
#[derive(Clone)]
pub struct SimulatedSubmitter<S> {
    delay: Duration,
    sleep: S,
}

impl<S> SimulatedSubmitter<S> {
    pub fn new(delay: Duration, sleep: S) -> Self {
        Self { delay, sleep }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<S, F> Submitter for SimulatedSubmitter<S>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    async fn submit(&self, draft: &ComplaintDraft) -> Result<Receipt, SubmitError> {
        let payload =
            serde_json::to_vec(draft).map_err(|e| SubmitError::Rejected(e.to_string()))?;
        tracing::debug!(
            payload_bytes = payload.len(),
            delay_ms = self.delay.as_millis() as u64,
            "Simulating complaint submission"
        );

        (self.sleep)(self.delay).await;

        let now = Utc::now();
        let protocol = Protocol::generate(now.year(), &mut rand::rng());
        tracing::info!(%protocol, "Complaint accepted");
        Ok(Receipt {
            protocol,
            submitted_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn protocol_is_zero_padded() {
        assert_eq!(Protocol::new(2026, 7).to_string(), "#20260007");
        assert_eq!(Protocol::new(2026, 9999).to_string(), "#20269999");
    }

    #[test]
    fn protocol_suffix_wraps() {
        assert_eq!(Protocol::new(2026, 12_345).suffix(), 2_345);
    }

    #[test]
    fn generated_suffix_is_four_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let protocol = Protocol::generate(2026, &mut rng);
            assert!(protocol.suffix() < 10_000);
            assert_eq!(protocol.year(), 2026);
            assert_eq!(protocol.to_string().len(), 9);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submit_waits_for_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_secs(2), tokio::time::sleep);
        let start = tokio::time::Instant::now();

        let receipt = submitter.submit(&ComplaintDraft::new()).await.unwrap();

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2), "returned after {elapsed:?}");
        assert!(elapsed < Duration::from_secs(3));
        assert_eq!(receipt.protocol.year(), receipt.submitted_at.year());
    }
}

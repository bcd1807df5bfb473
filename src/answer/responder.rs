use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::knowledge;
use super::types::Response;

/// Default simulated processing latency, matching the original service's
/// observed response time.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 1500;

/// The seam between the form and whatever produces answers.
///
/// Today the only implementation is [`CannedResponder`]; a retrieval-backed
/// service would implement this same trait. The call is infallible: the
/// canned backend has no failure mode, and validation failures never reach
/// a responder, so there is no error type on this path.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Returns the name of the responder.
    fn name(&self) -> &str;

    /// Produce a response for an already-validated query.
    async fn answer(&self, query: &str) -> Response;
}

/// Responder backed by the static knowledge table, with a fixed suspension
/// standing in for network latency. This is the single asynchronous
/// boundary in the system.
pub struct CannedResponder {
    delay: Duration,
}

impl CannedResponder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_RESPONSE_DELAY_MS))
    }
}

#[async_trait]
impl Responder for CannedResponder {
    fn name(&self) -> &str {
        "canned"
    }

    async fn answer(&self, query: &str) -> Response {
        tokio::time::sleep(self.delay).await;
        let response = knowledge::classify(query);
        debug!(
            "Classified query ({} chars) -> {} citation(s)",
            query.chars().count(),
            response.citations.len()
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delay_answer_resolves_immediately() {
        let responder = CannedResponder::new(Duration::ZERO);
        let response = tokio_test::block_on(responder.answer("What are my rights?"));
        assert_eq!(response.answer, knowledge::FALLBACK_ANSWER);
        assert!(response.citations.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_delay_is_1500ms() {
        let responder = CannedResponder::default();
        let start = tokio::time::Instant::now();
        let response = responder.answer("Explain Section 166 claim rules").await;
        assert_eq!(
            start.elapsed(),
            Duration::from_millis(DEFAULT_RESPONSE_DELAY_MS)
        );
        assert!(response.answer.starts_with("Yes, under Section 166"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmission_yields_same_classification() {
        let responder = CannedResponder::default();
        let first = responder.answer("Is this a question about tenancy law?").await;
        let second = responder.answer("Is this a question about tenancy law?").await;
        assert_eq!(first, second);
    }

    #[test]
    fn test_responder_name() {
        assert_eq!(CannedResponder::default().name(), "canned");
    }
}

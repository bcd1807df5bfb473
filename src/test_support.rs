//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::answer::{knowledge, Responder, Response};

/// A responder that classifies with no delay, for tests that don't need
/// the simulated latency.
pub struct InstantResponder;

#[async_trait]
impl Responder for InstantResponder {
    fn name(&self) -> &str {
        "instant"
    }

    async fn answer(&self, query: &str) -> Response {
        knowledge::classify(query)
    }
}

/// Creates a test App with an InstantResponder.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(InstantResponder))
}

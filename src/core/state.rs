//! # Application State
//!
//! Core form state for Lexi. This module contains domain logic only -
//! no TUI-specific types. Presentation state (input buffer, cursor,
//! scroll position) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── responder: Arc<dyn Responder>   // answer backend (canned today)
//! ├── response: Option<Response>      // last classified answer
//! ├── is_loading: bool                // classification in flight
//! ├── error: Option<String>           // error banner text
//! └── status_message: String          // title bar status text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::answer::{Responder, Response};

pub struct App {
    pub responder: Arc<dyn Responder>,
    /// Last classified answer, if any. Dropped at each submit attempt so
    /// the error banner and the answer panel are never shown together.
    pub response: Option<Response>,
    /// True strictly between submission acceptance and delay resolution
    /// (or cancellation). Submit is ignored while set.
    pub is_loading: bool,
    /// Validation error text, surfaced verbatim in the error banner.
    pub error: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self {
            responder,
            response: None,
            is_loading: false,
            error: None,
            status_message: String::from("Welcome to Lexi!"),
        }
    }
}

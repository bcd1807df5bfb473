//! # Actions
//!
//! Everything that can happen in Lexi becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! The simulated delay resolves? That's `Action::ResponseReady(response)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the shell should perform. No I/O
//! happens here. Spawning the classification task, opening a citation
//! link, and tearing down the terminal all happen in the TUI loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the whole form state machine testable:
//! `assert_eq!(update(&mut app, action), expected_effect)`.

use crate::answer::{Citation, Response};
use crate::core::state::App;
use crate::core::validate::validate;

/// Discrete events the form reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The user submitted the input buffer's text.
    Submit(String),
    /// The in-flight classification resolved.
    ResponseReady(Response),
    /// The user cancelled the in-flight classification.
    CancelClassification,
    /// The user activated the citation at this index of the current response.
    OpenCitation(usize),
    Quit,
}

/// Side effects requested by the reducer, performed by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn the delayed classification task for this query.
    SpawnClassification(String),
    /// Open the citation's link in the system document viewer.
    OpenCitation(Citation),
    Quit,
}

/// The form state machine: Idle → Validating (on submit) → Idle-with-error
/// or Loading → Idle-with-response. Pure apart from mutating `app`.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(query) => {
            // Submit is disabled while a classification is in flight.
            if app.is_loading {
                return Effect::None;
            }

            // Each submit attempt starts from a clean slate.
            app.error = None;

            match validate(&query) {
                Err(e) => {
                    app.error = Some(e.to_string());
                    app.response = None;
                    Effect::None
                }
                Ok(()) => {
                    app.response = None;
                    app.is_loading = true;
                    app.status_message = String::from("Processing...");
                    Effect::SpawnClassification(query)
                }
            }
        }
        Action::ResponseReady(response) => {
            // A resolution arriving after cancellation is stale; drop it.
            if !app.is_loading {
                return Effect::None;
            }
            app.response = Some(response);
            app.is_loading = false;
            app.status_message.clear();
            Effect::None
        }
        Action::CancelClassification => {
            if app.is_loading {
                app.is_loading = false;
                app.status_message = String::from("Cancelled");
            }
            Effect::None
        }
        Action::OpenCitation(index) => match app
            .response
            .as_ref()
            .and_then(|r| r.citations.get(index))
        {
            Some(citation) => Effect::OpenCitation(citation.clone()),
            None => Effect::None,
        },
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::knowledge;
    use crate::test_support::test_app;

    fn submitted(app: &mut App, text: &str) -> Effect {
        update(app, Action::Submit(text.to_string()))
    }

    #[test]
    fn test_submit_empty_sets_error_and_no_effect() {
        let mut app = test_app();
        let effect = submitted(&mut app, "   ");
        assert_eq!(effect, Effect::None);
        assert_eq!(app.error.as_deref(), Some("Please enter a question"));
        assert!(!app.is_loading);
        assert!(app.response.is_none());
    }

    #[test]
    fn test_submit_short_sets_error() {
        let mut app = test_app();
        submitted(&mut app, "too short");
        assert_eq!(
            app.error.as_deref(),
            Some("Question too short - please provide more details")
        );
    }

    #[test]
    fn test_submit_digits_sets_error() {
        let mut app = test_app();
        submitted(&mut app, "1234567890");
        assert_eq!(app.error.as_deref(), Some("Please enter a valid question"));
    }

    #[test]
    fn test_submit_valid_starts_loading() {
        let mut app = test_app();
        let effect = submitted(&mut app, "What are my rights?");
        assert_eq!(
            effect,
            Effect::SpawnClassification("What are my rights?".to_string())
        );
        assert!(app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(app.status_message, "Processing...");
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let mut app = test_app();
        submitted(&mut app, "What are my rights?");
        let effect = submitted(&mut app, "Explain Section 166 claim rules");
        assert_eq!(effect, Effect::None);
        assert!(app.is_loading);
    }

    #[test]
    fn test_response_ready_stores_response_and_clears_loading() {
        let mut app = test_app();
        submitted(&mut app, "What are my rights?");
        let response = knowledge::classify("What are my rights?");
        let effect = update(&mut app, Action::ResponseReady(response.clone()));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.response, Some(response));
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_stale_response_after_cancel_is_dropped() {
        let mut app = test_app();
        submitted(&mut app, "What are my rights?");
        update(&mut app, Action::CancelClassification);
        assert!(!app.is_loading);
        assert_eq!(app.status_message, "Cancelled");

        let response = knowledge::classify("What are my rights?");
        update(&mut app, Action::ResponseReady(response));
        assert!(app.response.is_none());
    }

    #[test]
    fn test_failed_validation_clears_previous_response() {
        let mut app = test_app();
        submitted(&mut app, "Explain Section 166 claim rules");
        let response = knowledge::classify("Explain Section 166 claim rules");
        update(&mut app, Action::ResponseReady(response));
        assert!(app.response.is_some());

        // Error and answer panel are never shown together.
        submitted(&mut app, "short");
        assert!(app.error.is_some());
        assert!(app.response.is_none());
    }

    #[test]
    fn test_resubmit_clears_previous_error() {
        let mut app = test_app();
        submitted(&mut app, "short");
        assert!(app.error.is_some());

        submitted(&mut app, "What are my rights?");
        assert!(app.error.is_none());
        assert!(app.is_loading);
    }

    #[test]
    fn test_open_citation_resolves_index() {
        let mut app = test_app();
        submitted(&mut app, "Explain Section 166 claim rules");
        let response = knowledge::classify("Explain Section 166 claim rules");
        update(&mut app, Action::ResponseReady(response.clone()));

        let effect = update(&mut app, Action::OpenCitation(0));
        assert_eq!(effect, Effect::OpenCitation(response.citations[0].clone()));
    }

    #[test]
    fn test_open_citation_out_of_range_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::OpenCitation(3)), Effect::None);
    }

    #[test]
    fn test_quit_requests_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

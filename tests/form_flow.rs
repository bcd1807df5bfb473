use std::sync::Arc;
use std::time::Duration;

use lexi::answer::responder::DEFAULT_RESPONSE_DELAY_MS;
use lexi::answer::{CannedResponder, Responder};
use lexi::core::action::{Action, Effect, update};
use lexi::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

/// Creates an App backed by the real canned responder with the default
/// 1500ms delay (tests run under paused tokio time, so this is instant
/// in wall-clock terms).
fn create_test_app() -> App {
    App::new(Arc::new(CannedResponder::default()))
}

/// Drives one full submission cycle: submit → (if accepted) classify →
/// deliver the result back to the reducer. Returns the submit effect.
async fn submit_and_resolve(app: &mut App, query: &str) -> Effect {
    let effect = update(app, Action::Submit(query.to_string()));
    if let Effect::SpawnClassification(accepted) = &effect {
        let response = app.responder.clone().answer(accepted).await;
        update(app, Action::ResponseReady(response));
    }
    effect
}

// ============================================================================
// Validation Flow
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_empty_query_yields_empty_question_error() {
    let mut app = create_test_app();

    for query in ["", "   ", "\n \t "] {
        let effect = submit_and_resolve(&mut app, query).await;
        assert_eq!(effect, Effect::None);
        assert_eq!(app.error.as_deref(), Some("Please enter a question"));
        assert!(app.response.is_none());
    }
}

#[tokio::test(start_paused = true)]
async fn test_short_query_yields_too_short_error() {
    let mut app = create_test_app();
    submit_and_resolve(&mut app, "short one").await;
    assert_eq!(
        app.error.as_deref(),
        Some("Question too short - please provide more details")
    );
}

#[tokio::test(start_paused = true)]
async fn test_letterless_query_yields_invalid_question_error() {
    let mut app = create_test_app();
    submit_and_resolve(&mut app, "1234567890").await;
    assert_eq!(app.error.as_deref(), Some("Please enter a valid question"));
    assert!(app.response.is_none());
}

// ============================================================================
// Classification Flow
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_non_trigger_query_gets_fallback_answer() {
    let mut app = create_test_app();
    submit_and_resolve(&mut app, "What are my rights?").await;

    let response = app.response.as_ref().expect("response after resolution");
    assert_eq!(
        response.answer,
        "This doesn't appear to be a valid legal question about motor accident claims. \
         Please ask about Section 166 of the Motor Vehicles Act, 1988."
    );
    assert!(response.citations.is_empty());
    assert!(app.error.is_none());
    assert!(!app.is_loading);
}

#[tokio::test(start_paused = true)]
async fn test_section_166_query_gets_cited_answer() {
    let mut app = create_test_app();
    submit_and_resolve(&mut app, "Explain Section 166 claim rules").await;

    let response = app.response.as_ref().expect("response after resolution");
    assert!(
        response
            .answer
            .starts_with("Yes, under Section 166 of the Motor Vehicles Act, 1988")
    );
    assert_eq!(response.citations.len(), 1);
    assert_eq!(response.citations[0].source, "Dani Devi v. Pritam Singh");
    assert_eq!(response.citations[0].paragraph, 7);
}

#[tokio::test(start_paused = true)]
async fn test_trigger_matching_is_case_insensitive() {
    let mut app = create_test_app();
    submit_and_resolve(&mut app, "what does SECTION 166 say about this?").await;
    let response = app.response.as_ref().unwrap();
    assert_eq!(response.citations.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_classification_takes_the_simulated_delay() {
    let responder = CannedResponder::default();
    let start = tokio::time::Instant::now();
    responder.answer("What are my rights?").await;
    assert_eq!(
        start.elapsed(),
        Duration::from_millis(DEFAULT_RESPONSE_DELAY_MS)
    );
}

#[tokio::test(start_paused = true)]
async fn test_resubmitting_same_query_is_idempotent() {
    let mut app = create_test_app();

    submit_and_resolve(&mut app, "Is there any precedent for this at all?").await;
    let first = app.response.clone().unwrap();

    submit_and_resolve(&mut app, "Is there any precedent for this at all?").await;
    let second = app.response.clone().unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Form State Machine
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_submit_is_ignored_while_loading() {
    let mut app = create_test_app();

    let effect = update(&mut app, Action::Submit("What are my rights?".to_string()));
    assert!(matches!(effect, Effect::SpawnClassification(_)));
    assert!(app.is_loading);

    // Second submit while the first is in flight is dropped outright.
    let effect = update(
        &mut app,
        Action::Submit("Explain Section 166 claim rules".to_string()),
    );
    assert_eq!(effect, Effect::None);
}

#[tokio::test(start_paused = true)]
async fn test_error_and_response_are_mutually_exclusive() {
    let mut app = create_test_app();

    submit_and_resolve(&mut app, "Explain Section 166 claim rules").await;
    assert!(app.response.is_some() && app.error.is_none());

    submit_and_resolve(&mut app, "short").await;
    assert!(app.response.is_none() && app.error.is_some());

    submit_and_resolve(&mut app, "What are my rights?").await;
    assert!(app.response.is_some() && app.error.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_classification_leaves_no_response() {
    let mut app = create_test_app();

    update(&mut app, Action::Submit("What are my rights?".to_string()));
    update(&mut app, Action::CancelClassification);
    assert!(!app.is_loading);
    assert!(app.response.is_none());

    // A stale resolution arriving anyway must not resurrect the cycle.
    let stale = app.responder.clone().answer("What are my rights?").await;
    update(&mut app, Action::ResponseReady(stale));
    assert!(app.response.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_citation_activation_resolves_the_clicked_citation() {
    let mut app = create_test_app();
    submit_and_resolve(&mut app, "Explain Section 166 claim rules").await;

    let effect = update(&mut app, Action::OpenCitation(0));
    match effect {
        Effect::OpenCitation(citation) => {
            assert_eq!(citation.paragraph, 7);
            assert!(citation.link.starts_with("https://"));
        }
        other => panic!("Expected OpenCitation effect, got {other:?}"),
    }

    // Out-of-range activation is a no-op.
    assert_eq!(update(&mut app, Action::OpenCitation(5)), Effect::None);
}

//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core form logic could be re-hosted behind a different adapter (web,
//! API) without touching it.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (loading spinner): draws every ~80ms for smooth animation.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::answer::{CannedResponder, Citation, Responder};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{AnswerPanelState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigate citations with arrow keys. Typing auto-switches to Input.
    Cursor,
    /// Text editing in the input box. Esc switches to Cursor.
    Input,
}

/// TUI-specific presentation state (not part of core form logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub answer_panel: AnswerPanelState,
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            answer_panel: AnswerPanelState::new(),
            input_mode: InputMode::Input, // User expects to type immediately
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock  // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Build the responder from a resolved config.
pub fn build_responder(config: &ResolvedConfig) -> Arc<dyn Responder> {
    Arc::new(CannedResponder::new(Duration::from_millis(
        config.response_delay_ms,
    )))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let responder = build_responder(&config);
    let mut app = App::new(responder);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the background classification task
    let (tx, rx) = mpsc::channel();

    // Abort handle for the in-flight classification (Esc-to-cancel, teardown)
    let mut active_abort_handle: Option<tokio::task::AbortHandle> = None;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with App state
        tui.input_box.dimmed = app.is_loading;

        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Mouse hover — highlight the citation under the pointer
            if let TuiEvent::MouseMove(_col, row) = event {
                if citations_visible(&app) {
                    let frame_area = terminal.get_frame().area();
                    let input_height = tui.input_box.calculate_height(frame_area.width);
                    let hit =
                        ui::hit_test_citation(row, frame_area, input_height, &tui.answer_panel);
                    tui.answer_panel.selected = hit;
                }
                continue;
            }

            // Mouse click — activate the citation under the pointer
            if let TuiEvent::MouseClick(_col, row) = event {
                if citations_visible(&app) {
                    let frame_area = terminal.get_frame().area();
                    let input_height = tui.input_box.calculate_height(frame_area.width);
                    let hit =
                        ui::hit_test_citation(row, frame_area, input_height, &tui.answer_panel);
                    if let Some(index) = hit {
                        tui.answer_panel.selected = Some(index);
                        if let Effect::OpenCitation(citation) =
                            update(&mut app, Action::OpenCitation(index))
                        {
                            spawn_citation_open(citation);
                        }
                    }
                }
                continue;
            }

            // Scroll events — always go to the answer panel
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.answer_panel.handle_scroll(&event);
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Input => {
                    // Esc while loading → cancel the classification
                    if matches!(event, TuiEvent::Escape) && app.is_loading {
                        if let Some(handle) = active_abort_handle.take() {
                            handle.abort();
                        }
                        update(&mut app, Action::CancelClassification);
                        continue;
                    }
                    // Esc → switch to Cursor mode, select the first citation
                    if matches!(event, TuiEvent::Escape) {
                        tui.input_mode = InputMode::Cursor;
                        tui.answer_panel.select_next(citation_count(&app));
                        continue;
                    }

                    // InputBox handles everything else
                    if let Some(input_event) = tui.input_box.handle_event(&event) {
                        match input_event {
                            InputEvent::Submit(text) => {
                                if !app.is_loading
                                    && let Effect::SpawnClassification(query) =
                                        update(&mut app, Action::Submit(text))
                                {
                                    active_abort_handle =
                                        Some(spawn_classification(&app, query, tx.clone()));
                                }
                            }
                            InputEvent::ContentChanged => {}
                        }
                    }
                }
                InputMode::Cursor => {
                    match event {
                        // Esc while loading → cancel the classification
                        TuiEvent::Escape if app.is_loading => {
                            if let Some(handle) = active_abort_handle.take() {
                                handle.abort();
                            }
                            update(&mut app, Action::CancelClassification);
                        }
                        // Esc → back to text editing
                        TuiEvent::Escape => {
                            tui.input_mode = InputMode::Input;
                            tui.answer_panel.selected = None;
                        }
                        // Up/Down navigate citations
                        TuiEvent::CursorUp => {
                            tui.answer_panel.select_prev(citation_count(&app));
                        }
                        TuiEvent::CursorDown => {
                            tui.answer_panel.select_next(citation_count(&app));
                        }
                        // Enter activates the selected citation
                        TuiEvent::Submit => {
                            if let Some(index) = tui.answer_panel.selected
                                && let Effect::OpenCitation(citation) =
                                    update(&mut app, Action::OpenCitation(index))
                            {
                                spawn_citation_open(citation);
                            }
                        }
                        // Typing auto-switches to Input mode and forwards the event
                        TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                            tui.input_mode = InputMode::Input;
                            tui.answer_panel.selected = None;
                            tui.input_box.handle_event(&event);
                        }
                        _ => {}
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (classification results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if matches!(action, Action::ResponseReady(_)) {
                // Fresh response: reset scroll and selection
                tui.answer_panel = AnswerPanelState::new();
                active_abort_handle = None;
            }
            match update(&mut app, action) {
                Effect::Quit => {
                    should_quit = true;
                }
                Effect::OpenCitation(citation) => spawn_citation_open(citation),
                Effect::SpawnClassification(query) => {
                    active_abort_handle = Some(spawn_classification(&app, query, tx.clone()));
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    // Teardown: never leave the delayed task running
    if let Some(handle) = active_abort_handle.take() {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

fn citation_count(app: &App) -> usize {
    app.response.as_ref().map_or(0, |r| r.citations.len())
}

/// The citation surface is interactive only when the answer panel is the
/// main-area view.
fn citations_visible(app: &App) -> bool {
    app.response.is_some() && app.error.is_none() && !app.is_loading
}

fn spawn_classification(
    app: &App,
    query: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning classification task ({} chars)", query.chars().count());

    let responder = app.responder.clone();
    let handle = tokio::spawn(async move {
        let response = responder.answer(&query).await;
        debug!(
            "Classification result: {}",
            serde_json::to_string(&response).unwrap_or_default()
        );
        if tx.send(Action::ResponseReady(response)).is_err() {
            warn!("Failed to send classification result: receiver dropped");
        }
    });
    handle.abort_handle()
}

/// Open a citation's link in the system document viewer, fire-and-forget.
/// The paragraph number is informational only — no in-document navigation
/// happens, it is just recorded for diagnostics.
fn spawn_citation_open(citation: Citation) {
    info!("Opening citation '{}' in the system viewer", citation.source);
    tokio::spawn(async move {
        info!(
            "Would navigate to paragraph {} of {}",
            citation.paragraph, citation.source
        );
        let opener = if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        if let Err(e) = tokio::process::Command::new(opener)
            .arg(&citation.link)
            .spawn()
        {
            warn!("Failed to open {}: {}", citation.link, e);
        }
    });
}

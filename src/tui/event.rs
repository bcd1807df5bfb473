use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events, translated from crossterm.
pub enum TuiEvent {
    /// Ctrl+C. Quits regardless of mode.
    ForceQuit,
    /// Esc. Cancels an in-flight classification, or switches modes.
    Escape,
    /// Enter. Submits the question, or activates a selected citation.
    Submit,

    // Text editing events (routed to the input box)
    InputChar(char),
    /// Bracketed paste - preserves newlines.
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,

    // Viewport events
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    MouseMove(u16, u16),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    // Ctrl+C force-quits from any mode
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    // Ctrl+J inserts newline (ASCII LF; Ctrl+Enter sends this in most terminals)
                    (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::InputChar('\n')),
                    // Regular key handling
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                    (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                    (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Moved => {
                    Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

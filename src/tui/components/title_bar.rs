//! # TitleBar Component
//!
//! Top status bar showing the application name and transient status.
//!
//! Stateless: it receives everything as props and renders a single line,
//! so a plain `Span` is enough. No borders, no internal state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `status_message`: transient status (e.g. "Processing...", "Cancelled")
pub struct TitleBar {
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            String::from("Lexi Legal Assistant")
        } else {
            format!("Lexi Legal Assistant | {}", self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

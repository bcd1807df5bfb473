//! # ErrorBanner Component
//!
//! Displays a validation error verbatim. Shown in place of the answer
//! panel; the two are never visible together.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

pub struct ErrorBanner<'a> {
    pub message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let banner = Paragraph::new(self.message)
            .block(
                Block::bordered()
                    .title("Error")
                    .border_style(Style::default().fg(Color::Red)),
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(banner, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_error_banner_shows_message_verbatim() {
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut banner = ErrorBanner::new("Please enter a question");
        terminal.draw(|f| banner.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Please enter a question"));
        assert!(text.contains("Error"));
    }
}

//! # Landing Component
//!
//! Shown in the main area before the first submission: the application
//! name, what it can answer, and how to submit.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct Landing;

impl Component for Landing {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text_lines = vec![
            Line::from(Span::styled(
                "Lexi Legal Assistant",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Ask about Section 166 of the Motor Vehicles Act, 1988",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Enter submits · Ctrl+J inserts a newline · Ctrl+C quits",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let text_height = text_lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(text_height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_landing_shows_app_name_and_hint() {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| Landing.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Lexi Legal Assistant"));
        assert!(text.contains("Motor Vehicles Act"));
    }
}

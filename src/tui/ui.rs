use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AnswerPanel, AnswerPanelState, ErrorBanner, Landing, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top-level frame layout: title bar, main area, input box.
///
/// The main area shows exactly one of: the error banner, the loading view,
/// the answer panel, or the landing screen, in that priority order.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let input_height = tui.input_box.calculate_height(frame.area().width);
    let layout = Layout::vertical([Length(1), Min(0), Length(input_height)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, title_area);

    if let Some(error) = &app.error {
        ErrorBanner::new(error).render(frame, main_area);
    } else if app.is_loading {
        draw_loading_view(frame, main_area, spinner_frame);
    } else if let Some(response) = &app.response {
        AnswerPanel::new(response, &mut tui.answer_panel).render(frame, main_area);
    } else {
        Landing.render(frame, main_area);
    }

    tui.input_box.render(frame, input_area);
}

fn draw_loading_view(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let [centered] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    let paragraph = Paragraph::new(format!("{glyph} Processing..."))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}

/// Hit test: given a screen Y coordinate, find which citation block (if
/// any) is at that position. Recomputes the frame layout with the same
/// constraints as [`draw_ui`], then translates into the answer panel's
/// scrolled content coordinates.
pub fn hit_test_citation(
    screen_y: u16,
    frame_area: Rect,
    input_height: u16,
    panel: &AnswerPanelState,
) -> Option<usize> {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(input_height)]);
    let [_title_area, main_area, _input_area] = layout.areas(frame_area);

    if screen_y < main_area.y || screen_y >= main_area.y + main_area.height {
        return None;
    }

    let content_y = (screen_y - main_area.y) + panel.scroll_state.offset().y;
    panel.citation_at(content_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::knowledge;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_landing() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Lexi Legal Assistant"));
        assert!(text.contains("Question"));
    }

    #[test]
    fn test_draw_ui_error_banner() {
        let mut app = test_app();
        update(&mut app, Action::Submit("short".to_string()));
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Question too short - please provide more details"));
    }

    #[test]
    fn test_draw_ui_loading_spinner() {
        let mut app = test_app();
        update(&mut app, Action::Submit("What are my rights?".to_string()));
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Processing..."));
    }

    #[test]
    fn test_draw_ui_answer_panel() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Explain Section 166 claim rules".to_string()));
        let response = knowledge::classify("Explain Section 166 claim rules");
        update(&mut app, Action::ResponseReady(response));
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Yes, under Section 166"));
        assert!(text.contains("Dani Devi v. Pritam Singh"));
    }

    #[test]
    fn test_hit_test_citation_maps_screen_rows() {
        let mut app = test_app();
        update(&mut app, Action::Submit("Explain Section 166 claim rules".to_string()));
        let response = knowledge::classify("Explain Section 166 claim rules");
        update(&mut app, Action::ResponseReady(response));
        let mut tui = TuiState::new();
        draw_to_text(&app, &mut tui);

        let frame_area = Rect::new(0, 0, 100, 30);
        let input_height = tui.input_box.calculate_height(frame_area.width);
        let (citation_y, _) = tui.answer_panel.citation_spans[0];

        // Main area starts below the 1-row title bar.
        let screen_y = 1 + citation_y;
        assert_eq!(
            hit_test_citation(screen_y, frame_area, input_height, &tui.answer_panel),
            Some(0)
        );
        // The title bar row itself is never a citation.
        assert_eq!(
            hit_test_citation(0, frame_area, input_height, &tui.answer_panel),
            None
        );
    }
}

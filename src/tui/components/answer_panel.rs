//! # AnswerPanel Component
//!
//! Scrollable view of the classified answer and its citation blocks.
//!
//! ## Responsibilities
//!
//! - Render the answer paragraph
//! - Render one block per citation: quoted excerpt, source case name, and
//!   the "View in original document" affordance
//! - Cache each citation block's position for mouse hit testing
//! - Track which citation is selected (hover or cursor-mode navigation)
//!
//! Heights are predicted with `Paragraph::line_count` so the ScrollView
//! can be sized before anything is rendered into it.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::answer::{Citation, Response};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Presentation state that outlives a single frame.
pub struct AnswerPanelState {
    pub scroll_state: tui_scrollview::ScrollViewState,
    /// Currently selected citation (mouse hover or cursor-mode navigation).
    pub selected: Option<usize>,
    /// (y offset, height) of each citation block in content coordinates,
    /// cached during render for hit testing.
    pub citation_spans: Vec<(u16, u16)>,
}

impl AnswerPanelState {
    pub fn new() -> Self {
        Self {
            scroll_state: tui_scrollview::ScrollViewState::default(),
            selected: None,
            citation_spans: Vec::new(),
        }
    }

    /// Move the selection up, or to the last citation when nothing is
    /// selected yet.
    pub fn select_prev(&mut self, citation_count: usize) {
        if citation_count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => citation_count - 1,
            Some(i) => i - 1,
        });
    }

    /// Move the selection down, wrapping at the end.
    pub fn select_next(&mut self, citation_count: usize) {
        if citation_count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % citation_count,
        });
    }

    /// Which citation block (if any) contains this content row.
    pub fn citation_at(&self, content_y: u16) -> Option<usize> {
        self.citation_spans
            .iter()
            .position(|&(y, h)| content_y >= y && content_y < y + h)
    }

    /// Route viewport scroll events to the scroll state.
    pub fn handle_scroll(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
    }
}

impl Default for AnswerPanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient component, created fresh each frame from the current response.
pub struct AnswerPanel<'a> {
    response: &'a Response,
    state: &'a mut AnswerPanelState,
}

impl<'a> AnswerPanel<'a> {
    pub fn new(response: &'a Response, state: &'a mut AnswerPanelState) -> Self {
        Self { response, state }
    }

    fn answer_paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.response.answer.as_str())
            .block(Block::bordered().title("Answer"))
            .wrap(Wrap { trim: true })
    }

    fn citation_paragraph(citation: &Citation, index: usize, is_selected: bool) -> Paragraph<'_> {
        let border_style = if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let link_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Blue)
        };

        let lines = vec![
            Line::from(Span::styled(
                format!("\"{}\"", citation.text),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                format!("Source: {}", citation.source),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("View in original document (Paragraph {})", citation.paragraph),
                link_style,
            )),
        ];

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(format!("Citation {}", index + 1))
                    .border_style(border_style)
                    .title_style(border_style),
            )
            .wrap(Wrap { trim: true })
    }
}

impl Component for AnswerPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let response = self.response;

        // Reserve one column for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        let wrap_width = content_width.saturating_sub(2);

        let answer = self.answer_paragraph();
        let answer_height = answer.line_count(wrap_width) as u16;

        // Lay out: answer block, then a header line, then citation blocks.
        let mut y_offset = answer_height;
        let mut citations = Vec::with_capacity(response.citations.len());
        self.state.citation_spans.clear();

        let has_citations = !response.citations.is_empty();
        if has_citations {
            y_offset += 1; // "Citations:" header
        }

        for (index, citation) in response.citations.iter().enumerate() {
            let is_selected = self.state.selected == Some(index);
            let paragraph = Self::citation_paragraph(citation, index, is_selected);
            let height = paragraph.line_count(wrap_width) as u16;
            self.state.citation_spans.push((y_offset, height));
            citations.push((paragraph, y_offset, height));
            y_offset += height;
        }

        let total_height = y_offset;
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(
            self.answer_paragraph(),
            Rect::new(0, 0, content_width, answer_height),
        );

        if has_citations {
            scroll_view.render_widget(
                Paragraph::new("Citations:").style(Style::default().add_modifier(Modifier::BOLD)),
                Rect::new(0, answer_height, content_width, 1),
            );
        }

        for (paragraph, y, height) in citations {
            scroll_view.render_widget(paragraph, Rect::new(0, y, content_width, height));
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

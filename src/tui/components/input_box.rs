//! # InputBox Component
//!
//! Multi-line question entry.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Display the current buffer, or a placeholder example question
//!
//! ## State Management
//!
//! The buffer is internal state; `dimmed` is a prop from the application
//! state (set while a classification is in flight). The buffer is NOT
//! cleared on submit: this is a form, and on a validation error the user
//! corrects the text in place. Empty submissions are still emitted, since
//! the validator owns the decision, not the widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Borders (1 left + 1 right) consumed horizontally by the bordered block.
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically.
const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before internal scrolling kicks in.
const MAX_VISIBLE_LINES: u16 = 4;
/// Offset from area edge to content (border width).
const BORDER_OFFSET: u16 = 1;

/// Example question shown while the buffer is empty.
const PLACEHOLDER: &str = "e.g. In a motor accident claim where the deceased was \
self-employed and aged 54–55 years at the time of death...";

/// High-level events emitted by the InputBox.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed). Carries a copy of the
    /// buffer; the buffer itself is retained for in-place correction.
    Submit(String),
    /// Text content or cursor changed.
    ContentChanged,
}

/// Build textwrap options configured for the input box inner width.
fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border overhead.
fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Count wrapped lines for the given text, accounting for trailing
/// newlines that textwrap may not represent as empty lines.
fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);

    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    count
}

/// Find the byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Multi-line text input with placeholder and internal scrolling.
pub struct InputBox {
    /// Text buffer (internal state).
    pub buffer: String,
    /// Dim the widget while a classification is in flight (prop).
    pub dimmed: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len()).
    cursor_pos: usize,
    /// Line offset for internal scrolling (0 when content fits).
    scroll_offset: u16,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
            cursor_pos: 0,
            scroll_offset: 0,
        }
    }

    /// Calculate required height for current buffer content, clamped to
    /// viewport limits.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let content_lines = wrap_line_count(&self.buffer, width);
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Which wrapped line (0-based) the cursor is on.
    fn cursor_line(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let before = &self.buffer[..self.cursor_pos];
        let lines = textwrap::wrap(before, wrap_options(width));
        let mut cursor_line = lines.len().saturating_sub(1) as u16;

        // Cursor right after a newline that textwrap didn't represent
        if self.cursor_pos > 0
            && self.buffer.as_bytes()[self.cursor_pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line += 1;
        }

        cursor_line
    }

    /// Keep the cursor visible within the scrolled viewport.
    fn update_scroll_offset(&mut self, content_width: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(&self.buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.cursor_line(content_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen position for the terminal cursor, in (column, row).
    fn screen_pos(&self, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let options = wrap_options(width);
        let before = &self.buffer[..self.cursor_pos];
        let lines = textwrap::wrap(before, &options);
        let mut cursor_line = lines.len().saturating_sub(1) as u16;

        if self.cursor_pos > 0
            && self.buffer.as_bytes()[self.cursor_pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line += 1;
        }

        // Column: re-wrap just the current logical line and measure the
        // display width of its final segment up to the cursor. textwrap
        // trims trailing whitespace, so the segment lengths can't be used
        // directly.
        let last_newline = before.rfind('\n').map(|p| p + 1).unwrap_or(0);
        let logical_tail = &before[last_newline..];
        let wrapped_tail = textwrap::wrap(logical_tail, options);

        let cursor_col = if wrapped_tail.is_empty() {
            0
        } else {
            let chars_in_prev: usize = wrapped_tail
                .iter()
                .take(wrapped_tail.len() - 1)
                .map(|seg| seg.chars().count())
                .sum();
            let segment_tail: String = logical_tail.chars().skip(chars_in_prev).collect();
            segment_tail.as_str().width() as u16
        };

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);

        (
            area.x + BORDER_OFFSET + cursor_col,
            area.y + BORDER_OFFSET + visible_line,
        )
    }

    /// Move the cursor to the previous/next logical line, keeping the
    /// column where possible.
    fn move_vertical(&mut self, direction: i16) -> bool {
        let before = &self.buffer[..self.cursor_pos];
        let line_start = before.rfind('\n').map(|p| p + 1).unwrap_or(0);
        let column = before[line_start..].chars().count();

        let (target_start, target_line) = if direction < 0 {
            if line_start == 0 {
                return false;
            }
            let prev_start = self.buffer[..line_start - 1]
                .rfind('\n')
                .map(|p| p + 1)
                .unwrap_or(0);
            (prev_start, &self.buffer[prev_start..line_start - 1])
        } else {
            let Some(line_end) = self.buffer[self.cursor_pos..]
                .find('\n')
                .map(|i| self.cursor_pos + i)
            else {
                return false;
            };
            let next_start = line_end + 1;
            let next_end = self.buffer[next_start..]
                .find('\n')
                .map(|i| next_start + i)
                .unwrap_or(self.buffer.len());
            (next_start, &self.buffer[next_start..next_end])
        };

        let new_col = column.min(target_line.chars().count());
        let col_bytes: usize = target_line
            .chars()
            .take(new_col)
            .map(|c| c.len_utf8())
            .sum();
        self.cursor_pos = target_start + col_bytes;
        true
    }

    /// Visible slice of the buffer based on the current scroll offset.
    fn visible_text(&self, content_width: u16) -> String {
        if self.scroll_offset == 0 {
            return self.buffer.clone();
        }

        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = self.scroll_offset as usize;
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());

        lines[start..end].join("\n")
    }

    /// Render a scrollbar when content exceeds the visible area.
    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let width = inner_width(area.width);
        let total_lines = wrap_line_count(&self.buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            return;
        }

        let max_scroll = total_lines.saturating_sub(MAX_VISIBLE_LINES);

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.update_scroll_offset(area.width);

        let (title, style) = if self.dimmed {
            (
                "Question (processing...)",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            ("Question", Style::default().fg(Color::Green))
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(style)
            .title(title);

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .block(block)
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .wrap(Wrap { trim: false })
        } else {
            Paragraph::new(self.visible_text(area.width))
                .block(block)
                .style(style)
                .wrap(Wrap { trim: false })
        };

        frame.render_widget(input, area);
        self.render_scrollbar(frame, area);

        let (cursor_x, cursor_y) = self.screen_pos(area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor_pos, *c);
                self.cursor_pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor_pos, text);
                self.cursor_pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(prev..self.cursor_pos);
                    self.cursor_pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor_pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(self.cursor_pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = prev_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor_pos < self.buffer.len() {
                    self.cursor_pos = next_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor_pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor_pos != line_start).then(|| {
                    self.cursor_pos = line_start;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor_pos..]
                    .find('\n')
                    .map(|i| self.cursor_pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor_pos != line_end).then(|| {
                    self.cursor_pos = line_end;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorUp => self
                .move_vertical(-1)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorDown => self
                .move_vertical(1)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

//! # SearchBar Component
//!
//! Single-line text field for the name search. Emits the whole buffer on
//! every edit; the reducer decides whether the text is worth a request.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::settings::Theme;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

const PLACEHOLDER: &str = "Search for a country...";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Buffer contents after an edit.
    Changed(String),
}

/// Search field state. Lives in `TuiState`.
#[derive(Debug)]
pub struct SearchBar {
    pub buffer: String,
    /// Byte offset of the cursor in `buffer`.
    cursor: usize,
    /// Colours for the next render (Prop)
    pub palette: Palette,
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(pos)
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            palette: Palette::for_theme(Theme::default()),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents without emitting an event; cursor goes to the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.chars().filter(|c| !c.is_control()).collect();
        self.cursor = self.buffer.len();
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(palette.dim())
            .style(palette.card());

        let content = if self.buffer.is_empty() {
            Span::styled(PLACEHOLDER, palette.dim())
        } else {
            Span::styled(self.buffer.as_str(), palette.card())
        };
        frame.render_widget(Paragraph::new(content).block(block), area);

        let column = UnicodeWidthStr::width(&self.buffer[..self.cursor]) as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + column).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // single-line field
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> SearchBar {
        let mut bar = SearchBar::new();
        for c in text.chars() {
            bar.handle_event(&TuiEvent::InputChar(c));
        }
        bar
    }

    #[test]
    fn test_typing_emits_full_buffer() {
        let mut bar = typed("ger");
        let res = bar.handle_event(&TuiEvent::InputChar('m'));
        assert_eq!(res, Some(SearchEvent::Changed("germ".to_string())));
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut bar = typed("peru");
        assert_eq!(
            bar.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("per".to_string()))
        );
        bar.handle_event(&TuiEvent::CursorHome);
        assert_eq!(
            bar.handle_event(&TuiEvent::Delete),
            Some(SearchEvent::Changed("er".to_string()))
        );
        assert_eq!(bar.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut bar = typed("côte");
        bar.handle_event(&TuiEvent::CursorLeft);
        bar.handle_event(&TuiEvent::CursorLeft);
        bar.handle_event(&TuiEvent::Backspace);
        assert_eq!(bar.buffer, "cte");
        assert_eq!(bar.cursor(), 1);
    }

    #[test]
    fn test_set_text_keeps_editing_at_end() {
        let mut bar = SearchBar::new();
        bar.set_text("germ");
        assert_eq!(bar.cursor(), 4);
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('a')),
            Some(SearchEvent::Changed("germa".to_string()))
        );
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut bar = SearchBar::new();
        let res = bar.handle_event(&TuiEvent::Paste("new\nzealand".to_string()));
        assert_eq!(res, Some(SearchEvent::Changed("newzealand".to_string())));
    }

    #[test]
    fn test_render_placeholder() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = SearchBar::new();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Search for a country..."));
    }
}

//! # TitleBar Component
//!
//! Top line: app title and status on the left, a loading spinner and the
//! theme toggle hint on the right.
//!
//! Purely presentational: it receives all data as props and has no
//! internal state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::settings::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct TitleBar<'a> {
    pub status_message: &'a str,
    pub theme: Theme,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar<'_> {
    fn right_text(&self) -> String {
        let toggle = format!("^T {}", self.theme.toggle_label());
        if self.is_loading {
            format!("{} Loading  {}", SPINNER[self.spinner_frame % SPINNER.len()], toggle)
        } else {
            toggle
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);
        let right = self.right_text();

        let [left_area, right_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(right.chars().count() as u16 + 1),
        ])
        .areas(area);

        let left = Line::from(vec![
            Span::styled(
                "Where in the world?",
                palette.label().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", self.status_message), palette.dim()),
        ]);

        frame.render_widget(Paragraph::new(left).style(palette.card()), left_area);
        frame.render_widget(
            Paragraph::new(right)
                .alignment(Alignment::Right)
                .style(palette.card()),
            right_area,
        );
    }
}

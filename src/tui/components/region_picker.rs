//! # RegionPicker Component
//!
//! Shows the active region filter. Tab / Shift+Tab cycle it; the event loop
//! turns that into `Action::FilterRegion`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::query::Region;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct RegionPicker {
    pub region: Region,
    pub palette: Palette,
}

impl Component for RegionPicker {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.dim())
            .title(Span::styled(" Filter by Region (Tab) ", self.palette.dim()))
            .style(self.palette.card());

        let line = Line::from(vec![
            Span::styled("< ", self.palette.dim()),
            Span::styled(self.region.label(), self.palette.label()),
            Span::styled(" >", self.palette.dim()),
        ]);

        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center).block(block),
            area,
        );
    }
}

//! # CountryDetail Component
//!
//! Detail page for one country, rendered from `DetailState`:
//!
//! - `Loading` / `Error`: a centred one-line message.
//! - `Loaded`: a scrollable sheet of facts followed by the border tags.
//!
//! Left / Right move between border tags, Enter opens the selected one,
//! Esc or Backspace goes back.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::detail::{CountryDetail, DetailState};
use crate::report::format_population;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    Back,
    /// Index into `CountryDetail::borders`.
    OpenBorder(usize),
}

/// Scroll and border selection. Must be persisted in the parent TuiState
/// and reset whenever a new detail route is entered.
#[derive(Debug, Default)]
pub struct CountryDetailState {
    pub scroll_state: ScrollViewState,
    pub selected_border: usize,
    /// Border tags at the last render.
    pub border_count: usize,
}

impl CountryDetailState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for CountryDetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace => return Some(DetailEvent::Back),
            TuiEvent::CursorLeft => {
                self.selected_border = self.selected_border.saturating_sub(1);
            }
            TuiEvent::CursorRight => {
                if self.selected_border + 1 < self.border_count {
                    self.selected_border += 1;
                }
            }
            TuiEvent::Submit if self.selected_border < self.border_count => {
                return Some(DetailEvent::OpenBorder(self.selected_border));
            }
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

pub struct CountryDetailView<'a> {
    pub state: &'a mut CountryDetailState,
    pub detail: &'a DetailState,
    pub palette: Palette,
}

fn fact<'a>(label: &'a str, value: String, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), palette.label()),
        Span::raw(value),
    ])
}

fn sheet(detail: &CountryDetail, selected_border: usize, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(detail.name.clone(), palette.label())),
        Line::default(),
        fact("Official Name", detail.official.clone(), palette),
        fact("Population", format_population(detail.population), palette),
        fact("Region", detail.region.clone(), palette),
        fact("Sub Region", detail.subregion.clone(), palette),
        fact("Capital", detail.capital.join(", "), palette),
        Line::default(),
        fact("Currencies", detail.currencies.join(", "), palette),
        fact("Languages", detail.languages.join(", "), palette),
    ];

    if !detail.flag_png.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Flag: ", palette.label()),
            Span::styled(detail.flag_png.clone(), palette.dim()),
        ]));
    }
    if let Some(alt) = &detail.flag_alt {
        lines.push(Line::from(Span::styled(alt.clone(), palette.dim())));
    }

    lines.push(Line::default());
    if detail.borders.is_empty() {
        lines.push(fact("Border Countries", "None".to_string(), palette));
    } else {
        let mut tags = vec![Span::styled("Border Countries: ", palette.label())];
        for (i, code) in detail.borders.iter().enumerate() {
            let style = if i == selected_border {
                palette.selected()
            } else {
                palette.card()
            };
            tags.push(Span::styled(format!(" {} ", detail.border_label(code)), style));
            tags.push(Span::raw(" "));
        }
        lines.push(Line::from(tags));
    }
    lines
}

impl CountryDetailView<'_> {
    fn render_message(&self, frame: &mut Frame, area: Rect, message: Line<'_>) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.dim())
            .title(Span::styled(" Esc: Back ", self.palette.dim()))
            .style(self.palette.base());
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_loaded(&mut self, frame: &mut Frame, area: Rect, detail: &CountryDetail) {
        self.state.border_count = detail.borders.len();
        if self.state.selected_border >= self.state.border_count {
            self.state.selected_border = self.state.border_count.saturating_sub(1);
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.dim())
            .title(Span::styled(
                " Esc: Back  ←/→: Borders  Enter: Open ",
                self.palette.dim(),
            ))
            .style(self.palette.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(sheet(detail, self.state.selected_border, &self.palette))
            .style(self.palette.base())
            .wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

impl Component for CountryDetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let detail = self.detail;
        match detail {
            DetailState::Idle => {}
            DetailState::Loading { name } => {
                let message = Line::from(Span::styled(
                    format!("Loading {name}..."),
                    self.palette.dim(),
                ));
                self.render_message(frame, area, message);
            }
            DetailState::Error(message) => {
                let message = Line::from(Span::styled(
                    message.clone(),
                    ratatui::style::Style::default().fg(self.palette.error),
                ));
                self.render_message(frame, area, message);
            }
            DetailState::Loaded(country) => self.render_loaded(frame, area, country),
        }
    }
}

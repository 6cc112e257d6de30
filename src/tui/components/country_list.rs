//! # CountryList Component
//!
//! Scrollable list of country cards: name on the first line, population,
//! region and capital on the second.
//!
//! `CountryList` is a transient component (created each frame) that wraps
//! `&'a mut CountryListState` (persistent state) and the current countries
//! (props). The item count is cached during render so that event handling
//! between frames can clamp the selection.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::directory::CountryRecord;
use crate::report::format_population;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

/// Rows moved by PageUp / PageDown.
const PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum CountryListEvent {
    /// Enter on the selected card.
    Open(usize),
}

/// Selection state for the list. Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct CountryListState {
    pub list_state: ListState,
    /// Number of items at the last render.
    pub len: usize,
}

impl CountryListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keep the selection inside `0..len`, selecting the first row when a
    /// non-empty list has no selection yet.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    /// Back to the top, e.g. after a new result set arrived.
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
        self.set_len(self.len);
    }

    fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, self.len as isize - 1);
        self.list_state.select(Some(target as usize));
    }
}

/// EventHandler lives on the state rather than the transient wrapper since
/// the wrapper only exists during the render pass.
impl EventHandler for CountryListState {
    type Event = CountryListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.move_by(-1),
            TuiEvent::CursorDown => self.move_by(1),
            TuiEvent::PageUp => self.move_by(-(PAGE as isize)),
            TuiEvent::PageDown => self.move_by(PAGE as isize),
            TuiEvent::Submit => {
                return self
                    .list_state
                    .selected()
                    .filter(|&i| i < self.len)
                    .map(CountryListEvent::Open);
            }
            _ => {}
        }
        None
    }
}

pub struct CountryList<'a> {
    pub state: &'a mut CountryListState,
    pub countries: &'a [CountryRecord],
    /// A list request is in flight (Prop)
    pub is_loading: bool,
    pub palette: Palette,
}

fn card(country: &CountryRecord, palette: &Palette) -> ListItem<'static> {
    let mut details = vec![
        Span::styled("Population: ", palette.dim()),
        Span::raw(format_population(country.population)),
        Span::styled("  Region: ", palette.dim()),
        Span::raw(country.region.clone()),
    ];
    if let Some(capital) = country.primary_capital() {
        details.push(Span::styled("  Capital: ", palette.dim()));
        details.push(Span::raw(capital.to_string()));
    }

    ListItem::new(vec![
        Line::from(Span::styled(
            country.name.common.clone(),
            palette.label(),
        )),
        Line::from(details),
    ])
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_len(self.countries.len());

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.dim())
            .style(self.palette.base());

        if self.countries.is_empty() {
            let message = if self.is_loading {
                "Loading..."
            } else {
                "No Countries Found"
            };
            let empty = Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(self.palette.dim().add_modifier(Modifier::BOLD))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .countries
            .iter()
            .map(|country| card(country, &self.palette))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(self.palette.card())
            .highlight_style(self.palette.selected())
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

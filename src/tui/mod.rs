//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Key Map
//!
//! | Route  | Keys                         | Action                          |
//! |--------|------------------------------|---------------------------------|
//! | any    | Ctrl+C / Ctrl+Q              | `Quit`                          |
//! | any    | Ctrl+T                       | `ToggleTheme`                   |
//! | list   | typing                       | `Search`                        |
//! | list   | Tab / Shift+Tab              | `FilterRegion`                  |
//! | list   | Up / Down / PgUp / PgDn      | move selection                  |
//! | list   | Enter                        | `SelectCountry`                 |
//! | list   | Esc                          | `Quit`                          |
//! | detail | Left / Right, Enter          | pick a border, `ResolveBorder`  |
//! | detail | Up / Down / PgUp / PgDn      | scroll                          |
//! | detail | Esc / Backspace              | `NavigateBack`                  |
//!
//! ## Redraw Strategy
//!
//! - **Animating** (a request in flight): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, results or resize.
//!
//! Network effects run on tokio tasks; each sends its result back as an
//! `Action` over a channel that the loop drains between frames.

mod component;
mod components;
mod event;
mod palette;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::query::sanitize_query;
use crate::core::settings::SettingsStore;
use crate::core::state::App;
use crate::directory::CountryDirectory;
use crate::runtime;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CountryDetailState, CountryListEvent, CountryListState, DetailEvent, SearchBar, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search_bar: SearchBar,
    pub country_list: CountryListState,
    pub country_detail: CountryDetailState,
    // Generations last seen, to reset view state when new content arrives
    seen_list_generation: u64,
    seen_detail_generation: u64,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            country_list: CountryListState::new(),
            country_detail: CountryDetailState::new(),
            seen_list_generation: 0,
            seen_detail_generation: 0,
        }
    }

    /// State for a session started with `startup`: a startup search shows up
    /// in the search bar.
    fn for_startup(startup: &[Action]) -> Self {
        let mut tui = Self::new();
        let query = startup.iter().rev().find_map(|action| match action {
            Action::Search(query) => Some(query),
            _ => None,
        });
        if let Some(query) = query {
            tui.search_bar.set_text(query);
        }
        tui
    }

    /// Reset list selection and detail scroll when the app moved on to a new
    /// request.
    fn sync_with(&mut self, app: &App) {
        if self.seen_list_generation != app.list_generation {
            self.seen_list_generation = app.list_generation;
            self.country_list.reset();
        }
        if self.seen_detail_generation != app.detail_generation {
            self.seen_detail_generation = app.detail_generation;
            self.country_detail = CountryDetailState::new();
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Release events are filtered in event.rs; the flags are ignored by
        // terminals without keyboard enhancement support
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Translate a terminal event into an `Action` for the current route,
/// updating component state on the way.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::ToggleTheme => return Some(Action::ToggleTheme),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if app.on_detail_route() {
        return match tui.country_detail.handle_event(event)? {
            DetailEvent::Back => Some(Action::NavigateBack),
            DetailEvent::OpenBorder(index) => {
                let code = app.detail.loaded()?.borders.get(index)?;
                Some(Action::ResolveBorder(code.clone()))
            }
        };
    }

    match event {
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::NextRegion => Some(Action::FilterRegion(app.region.next())),
        TuiEvent::PrevRegion => Some(Action::FilterRegion(app.region.prev())),
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::PageUp
        | TuiEvent::PageDown
        | TuiEvent::Submit => match tui.country_list.handle_event(event)? {
            CountryListEvent::Open(index) => {
                let country = app.countries.get(index)?;
                Some(Action::SelectCountry(country.name.common.clone()))
            }
        },
        _ => match tui.search_bar.handle_event(event)? {
            // Clearing the search brings back the list for the active region
            SearchEvent::Changed(text) if sanitize_query(&text).is_empty() => {
                text.is_empty().then_some(Action::FilterRegion(app.region))
            }
            SearchEvent::Changed(text) => Some(Action::Search(text)),
        },
    }
}

fn spawn_effect(directory: Arc<dyn CountryDirectory>, effect: Effect, tx: mpsc::Sender<Action>) {
    debug!("Spawning effect: {:?}", effect);
    tokio::spawn(async move {
        if let Some(action) = runtime::perform(directory.as_ref(), effect).await
            && tx.send(action).is_err()
        {
            warn!("Failed to send effect result: receiver dropped");
        }
    });
}

/// Run `action` through the reducer and start its effect.
/// Returns `false` once the app asked to quit.
fn dispatch(
    app: &mut App,
    action: Action,
    settings: Option<&SettingsStore>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::None => {}
        Effect::Quit => return false,
        Effect::PersistTheme(theme) => runtime::persist_theme(settings, theme),
        effect => spawn_effect(app.directory.clone(), effect, tx.clone()),
    }
    true
}

pub fn run(
    mut app: App,
    settings: Option<SettingsStore>,
    startup: Vec<Action>,
) -> std::io::Result<()> {
    let mut tui = TuiState::for_startup(&startup);

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    for action in startup {
        dispatch(&mut app, action, settings.as_ref(), &tx);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading || app.detail.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            tui.sync_with(&app);
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&app, &mut tui, &event) {
                debug!("Event {:?} -> {:?}", event, action);
                if !dispatch(&mut app, action, settings.as_ref(), &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if !dispatch(&mut app, action, settings.as_ref(), &tx) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Terra shutting down");
    ratatui::restore();
    Ok(())
}

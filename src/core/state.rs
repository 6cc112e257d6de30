//! # Application State
//!
//! Core business state for Terra. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── directory: Arc<dyn CountryDirectory>  // remote country directory
//! ├── countries: Vec<CountryRecord>         // current list (may be empty)
//! ├── is_loading: bool                      // list request in flight
//! ├── theme: Theme                          // light / dark
//! ├── region: Region                        // selected region filter
//! ├── route: Route                          // list or detail
//! ├── history: Vec<Route>                   // back stack
//! ├── detail: DetailState                   // detail view state machine
//! ├── status_message: String                // status bar text
//! ├── resolve_borders: bool                 // border-name fan-out on/off
//! ├── list_generation: u64                  // latest list request token
//! └── detail_generation: u64                // latest detail request token
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::detail::DetailState;
use crate::core::query::Region;
use crate::core::route::Route;
use crate::core::settings::Theme;
use crate::directory::{CountryDirectory, CountryRecord};

pub struct App {
    pub directory: Arc<dyn CountryDirectory>,
    pub countries: Vec<CountryRecord>,
    pub is_loading: bool,
    pub theme: Theme,
    pub region: Region,
    pub route: Route,
    pub history: Vec<Route>,
    pub detail: DetailState,
    pub status_message: String,
    pub resolve_borders: bool,
    /// Token of the most recent list request; older results are dropped.
    pub list_generation: u64,
    /// Token of the most recent detail route entry.
    pub detail_generation: u64,
}

impl App {
    pub fn new(directory: Arc<dyn CountryDirectory>, theme: Theme) -> Self {
        Self {
            directory,
            countries: Vec::new(),
            is_loading: false,
            theme,
            region: Region::All,
            route: Route::List,
            history: Vec::new(),
            detail: DetailState::Idle,
            status_message: String::from("Where in the world?"),
            resolve_borders: true,
            list_generation: 0,
            detail_generation: 0,
        }
    }

    pub fn from_config(
        directory: Arc<dyn CountryDirectory>,
        config: &ResolvedConfig,
        theme: Theme,
    ) -> Self {
        let mut app = Self::new(directory, theme);
        app.resolve_borders = config.resolve_borders;
        app
    }

    pub fn on_detail_route(&self) -> bool {
        matches!(self.route, Route::Detail { .. })
    }
}

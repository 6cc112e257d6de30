//! # Actions
//!
//! Everything that can happen in Terra becomes an `Action`.
//! User types in the search box? That's `Action::Search(text)`.
//! The directory answers? That's `Action::ListLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the runtime should perform next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Request generations
//!
//! Every list request and every detail route entry bumps a generation
//! counter, and the effect carries it. Results come back tagged with the
//! generation they were issued for; `update()` applies a result only if its
//! generation is still the latest. A slow response to an old keystroke can
//! therefore never overwrite the answer to a newer one.

use log::{debug, info, warn};

use crate::core::detail::{CountryDetail, DetailState};
use crate::core::query::{Region, sanitize_query};
use crate::core::route::Route;
use crate::core::settings::Theme;
use crate::core::state::App;
use crate::directory::{CountryRecord, DirectoryError};

/// Which list the directory should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    All,
    Name(String),
    Region(Region),
}

#[derive(Debug)]
pub enum Action {
    /// Fetch the full directory.
    LoadAll,
    /// Raw search box contents.
    Search(String),
    FilterRegion(Region),
    ToggleTheme,
    /// Navigate to the detail route for a country.
    SelectCountry(String),
    /// Pop the back stack.
    NavigateBack,
    /// A border tag was activated; the value is its alpha code.
    ResolveBorder(String),
    Quit,

    // Results from the runtime
    ListLoaded {
        generation: u64,
        result: Result<Vec<CountryRecord>, DirectoryError>,
    },
    DetailLoaded {
        generation: u64,
        result: Result<CountryDetail, DirectoryError>,
    },
    BorderResolved {
        generation: u64,
        code: String,
        result: Result<CountryRecord, DirectoryError>,
    },
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchList {
        generation: u64,
        request: ListRequest,
    },
    FetchDetail {
        generation: u64,
        name: String,
        resolve_borders: bool,
    },
    ResolveBorder {
        generation: u64,
        code: String,
    },
    PersistTheme(Theme),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadAll => start_list_request(app, ListRequest::All),

        Action::Search(raw) => {
            let query = sanitize_query(&raw);
            if query.is_empty() {
                debug!("Search {:?} has no letters, skipping request", raw);
                return Effect::None;
            }
            start_list_request(app, ListRequest::Name(query))
        }

        Action::FilterRegion(region) => {
            app.region = region;
            match region {
                Region::All => start_list_request(app, ListRequest::All),
                other => start_list_request(app, ListRequest::Region(other)),
            }
        }

        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            info!("Theme switched to {:?}", app.theme);
            Effect::PersistTheme(app.theme)
        }

        Action::SelectCountry(identifier) => {
            let target = Route::detail(&identifier);
            info!("Navigating to {}", target.path());
            let previous = std::mem::replace(&mut app.route, Route::List);
            app.history.push(previous);
            enter_route(app, target)
        }

        Action::NavigateBack => {
            let target = app.history.pop().unwrap_or(Route::List);
            info!("Navigating back to {}", target.path());
            enter_route(app, target)
        }

        Action::ResolveBorder(code) => {
            if !app.on_detail_route() {
                return Effect::None;
            }
            Effect::ResolveBorder {
                generation: app.detail_generation,
                code,
            }
        }

        Action::Quit => Effect::Quit,

        Action::ListLoaded { generation, result } => {
            if generation != app.list_generation {
                debug!(
                    "Dropping stale list result (generation {}, latest {})",
                    generation, app.list_generation
                );
                return Effect::None;
            }
            app.is_loading = false;
            match result {
                Ok(countries) => {
                    app.status_message = format!("{} countries", countries.len());
                    app.countries = countries;
                }
                Err(DirectoryError::NotFound) => {
                    info!("No matching countries, keeping current list");
                }
                Err(e) => {
                    warn!("List request failed, keeping current list: {}", e);
                }
            }
            Effect::None
        }

        Action::DetailLoaded { generation, result } => {
            if generation != app.detail_generation || !app.detail.is_loading() {
                debug!("Dropping stale detail result (generation {})", generation);
                return Effect::None;
            }
            app.detail = match result {
                Ok(detail) => DetailState::Loaded(Box::new(detail)),
                Err(e) => {
                    warn!("Detail request failed: {}", e);
                    DetailState::Error(detail_error_message(&e))
                }
            };
            Effect::None
        }

        Action::BorderResolved {
            generation,
            code,
            result,
        } => {
            if generation != app.detail_generation {
                debug!("Dropping stale border result for {}", code);
                return Effect::None;
            }
            match result {
                Ok(record) => update(app, Action::SelectCountry(record.name.common)),
                Err(e) => {
                    warn!("Failed to resolve border {}: {}", code, e);
                    Effect::None
                }
            }
        }
    }
}

fn start_list_request(app: &mut App, request: ListRequest) -> Effect {
    app.list_generation += 1;
    app.is_loading = true;
    debug!(
        "List request {:?} (generation {})",
        request, app.list_generation
    );
    Effect::FetchList {
        generation: app.list_generation,
        request,
    }
}

/// Switch to `route`. Entering a detail route starts a fresh load;
/// leaving for the list invalidates any load still in flight.
fn enter_route(app: &mut App, route: Route) -> Effect {
    app.detail_generation += 1;
    app.route = route;
    match &app.route {
        Route::List => {
            app.detail = DetailState::Idle;
            Effect::None
        }
        Route::Detail { name } => {
            app.detail = DetailState::Loading { name: name.clone() };
            Effect::FetchDetail {
                generation: app.detail_generation,
                name: name.clone(),
                resolve_borders: app.resolve_borders,
            }
        }
    }
}

fn detail_error_message(error: &DirectoryError) -> String {
    match error {
        DirectoryError::NotFound => "Country not found".to_string(),
        other => format!("Failed to fetch country data: {other}"),
    }
}

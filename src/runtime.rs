//! # Effect Runtime
//!
//! Turns the `Effect`s produced by `core::action::update` into I/O and
//! feeds the outcome back as `Action`s.
//!
//! - [`perform`] executes one network effect and returns the resulting action.
//!   The TUI spawns it on a tokio task per effect.
//! - [`Driver`] runs the reducer and the effects sequentially until the app
//!   settles. Used by `--print` and by the integration tests.

use std::collections::VecDeque;

use log::{debug, warn};

use crate::core::action::{Action, Effect, ListRequest, update};
use crate::core::settings::{SettingsStore, Theme};
use crate::core::state::App;
use crate::directory::{CountryDirectory, CountryRecord, DirectoryError, load_detail};

/// Run the directory request behind a `ListRequest`.
pub async fn fetch_list(
    directory: &dyn CountryDirectory,
    request: &ListRequest,
) -> Result<Vec<CountryRecord>, DirectoryError> {
    match request {
        ListRequest::All => directory.all().await,
        ListRequest::Name(query) => directory.by_name(query).await,
        ListRequest::Region(region) => match region.api_name() {
            Some(name) => directory.by_region(name).await,
            None => directory.all().await,
        },
    }
}

/// Execute a network effect. Returns `None` for effects that are not
/// network-bound (`None`, `Quit`, `PersistTheme`).
pub async fn perform(directory: &dyn CountryDirectory, effect: Effect) -> Option<Action> {
    match effect {
        Effect::FetchList {
            generation,
            request,
        } => {
            let result = fetch_list(directory, &request).await;
            Some(Action::ListLoaded { generation, result })
        }
        Effect::FetchDetail {
            generation,
            name,
            resolve_borders,
        } => {
            let result = load_detail(directory, &name, resolve_borders).await;
            Some(Action::DetailLoaded { generation, result })
        }
        Effect::ResolveBorder { generation, code } => {
            let result = directory.by_alpha(&code).await;
            Some(Action::BorderResolved {
                generation,
                code,
                result,
            })
        }
        Effect::None | Effect::Quit | Effect::PersistTheme(_) => None,
    }
}

/// Write the theme preference, logging instead of failing.
pub fn persist_theme(settings: Option<&SettingsStore>, theme: Theme) {
    let Some(store) = settings else {
        debug!("No settings store, theme {:?} not persisted", theme);
        return;
    };
    if let Err(e) = store.save_theme(theme) {
        warn!("Failed to persist theme to {}: {}", store.path().display(), e);
    }
}

/// Sequential reducer + effect loop.
pub struct Driver {
    pub app: App,
    settings: Option<SettingsStore>,
}

impl Driver {
    pub fn new(app: App, settings: Option<SettingsStore>) -> Self {
        Self { app, settings }
    }

    /// Dispatch `action` and every follow-up action its effects produce.
    /// Returns `false` once the app asked to quit.
    pub async fn dispatch(&mut self, action: Action) -> bool {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            debug!("Driver dispatching: {:?}", action);
            match update(&mut self.app, action) {
                Effect::None => {}
                Effect::Quit => return false,
                Effect::PersistTheme(theme) => persist_theme(self.settings.as_ref(), theme),
                effect => {
                    let directory = self.app.directory.clone();
                    if let Some(next) = perform(directory.as_ref(), effect).await {
                        queue.push_back(next);
                    }
                }
            }
        }
        true
    }
}

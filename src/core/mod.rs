//! # Core Application Logic
//!
//! This module contains Terra's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No network. No UI.     │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Headless  │      │ Directory  │
//!     │  Adapter   │      │   Driver   │      │  (reqwest) │
//!     │ (ratatui)  │      │  (--print) │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`detail`]: Detail view state machine and display fields
//! - [`route`]: List and detail routes
//! - [`query`]: Search sanitizing and region filter
//! - [`settings`]: Persisted theme preference
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod detail;
pub mod query;
pub mod route;
pub mod settings;
pub mod state;

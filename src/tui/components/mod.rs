//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: title, status, loading spinner and theme hint
//! - `RegionPicker`: the active region filter
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that own or wrap persistent state and emit events:
//! - `SearchBar`: the name search field
//! - `CountryList`: selectable list of country cards
//! - `CountryDetailView`: scrollable detail sheet with border tags
//!
//! Persistent state (`SearchBar`, `CountryListState`, `CountryDetailState`)
//! lives in `TuiState`. `CountryList` and `CountryDetailView` are transient
//! wrappers built each frame around that state plus the current `App` data.
//!
//! ## Props-Based Data Flow
//!
//! Components never read `App` directly. The caller passes what they need:
//!
//! ```rust,ignore
//! CountryList {
//!     state: &mut tui.country_list,
//!     countries: &app.countries,
//!     is_loading: app.is_loading,
//!     palette,
//! }
//! .render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top bar)
//! ├── search_bar.rs      (text input)
//! ├── region_picker.rs   (region filter)
//! ├── country_list.rs    (list route)
//! └── country_detail.rs  (detail route)
//! ```

mod country_detail;
mod country_list;
mod region_picker;
mod search_bar;
mod title_bar;

pub use country_detail::{CountryDetailState, CountryDetailView, DetailEvent};
pub use country_list::{CountryList, CountryListEvent, CountryListState};
pub use region_picker::RegionPicker;
pub use search_bar::{SearchBar, SearchEvent};
pub use title_bar::TitleBar;

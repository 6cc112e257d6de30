use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryDetailView, CountryList, RegionPicker, TitleBar};
use crate::tui::palette::Palette;

/// Width of the region picker next to the search bar.
const REGION_WIDTH: u16 = 28;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let palette = Palette::for_theme(app.theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TitleBar {
        status_message: &app.status_message,
        theme: app.theme,
        is_loading: app.is_loading || app.detail.is_loading(),
        spinner_frame,
    }
    .render(frame, title_area);

    if app.on_detail_route() {
        CountryDetailView {
            state: &mut tui.country_detail,
            detail: &app.detail,
            palette,
        }
        .render(frame, main_area);
    } else {
        draw_list_route(frame, main_area, app, tui, palette);
    }
}

fn draw_list_route(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    use Constraint::{Length, Min};

    let [controls_area, list_area] = Layout::vertical([Length(3), Min(0)]).areas(area);
    let [search_area, region_area] =
        Layout::horizontal([Min(0), Length(REGION_WIDTH)]).areas(controls_area);

    tui.search_bar.palette = palette;
    tui.search_bar.render(frame, search_area);

    RegionPicker {
        region: app.region,
        palette,
    }
    .render(frame, region_area);

    CountryList {
        state: &mut tui.country_list,
        countries: &app.countries,
        is_loading: app.is_loading,
        palette,
    }
    .render(frame, list_area);
}

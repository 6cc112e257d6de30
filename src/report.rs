//! Plain-text rendering of the app state for `--print`.

use std::fmt::Write;

use crate::core::detail::DetailState;
use crate::core::route::Route;
use crate::core::state::App;
use crate::directory::CountryRecord;

/// `83240525` → `"83,240,525"`.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn list_line(country: &CountryRecord) -> String {
    let mut line = format!(
        "{} | Population: {} | Region: {}",
        country.name.common,
        format_population(country.population),
        country.region
    );
    if let Some(capital) = country.primary_capital() {
        let _ = write!(line, " | Capital: {capital}");
    }
    line
}

/// Text for whatever the current route shows.
pub fn render(app: &App) -> String {
    match &app.route {
        Route::List => render_list(app),
        Route::Detail { .. } => render_detail(&app.detail),
    }
}

fn render_list(app: &App) -> String {
    if app.countries.is_empty() {
        return "No Countries Found\n".to_string();
    }
    let mut out = String::new();
    for country in &app.countries {
        out.push_str(&list_line(country));
        out.push('\n');
    }
    out
}

fn render_detail(state: &DetailState) -> String {
    match state {
        DetailState::Idle => String::new(),
        DetailState::Loading { name } => format!("Loading {name}...\n"),
        DetailState::Error(message) => format!("{message}\n"),
        DetailState::Loaded(detail) => {
            let mut out = String::new();
            let _ = writeln!(out, "{}", detail.name);
            let _ = writeln!(out, "Official Name: {}", detail.official);
            let _ = writeln!(out, "Population: {}", format_population(detail.population));
            let _ = writeln!(out, "Region: {}", detail.region);
            let _ = writeln!(out, "Sub Region: {}", detail.subregion);
            let _ = writeln!(out, "Capital: {}", detail.capital.join(", "));
            let _ = writeln!(out, "Currencies: {}", detail.currencies.join(", "));
            let _ = writeln!(out, "Languages: {}", detail.languages.join(", "));
            if !detail.borders.is_empty() {
                let borders: Vec<&str> = detail
                    .borders
                    .iter()
                    .map(|code| detail.border_label(code))
                    .collect();
                let _ = writeln!(out, "Border Countries: {}", borders.join(", "));
            }
            out
        }
    }
}

use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::sync::Arc;

use terra::core::action::Action;
use terra::core::config::{self, CliOverrides, ResolvedConfig, TerraConfig};
use terra::core::query::Region;
use terra::core::route::Route;
use terra::core::settings::{self, SettingsStore};
use terra::core::state::App;
use terra::directory::{CountryDirectory, RestCountriesDirectory};
use terra::runtime::Driver;
use terra::{report, tui};

#[derive(Parser)]
#[command(name = "terra", about = "Where in the world? Browse countries from your terminal")]
struct Args {
    /// Country directory base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Show border codes instead of resolving them to country names
    #[arg(long)]
    no_borders: bool,

    /// Region filter applied at startup (All, Africa, Americas, Asia, Europe, Oceania, Antarctic)
    #[arg(short, long)]
    region: Option<Region>,

    /// Name search applied at startup
    #[arg(short, long)]
    search: Option<String>,

    /// Open a country detail page: a name ("germany") or a route ("/united%20states")
    #[arg(short, long)]
    open: Option<String>,

    /// Print the result to stdout instead of starting the terminal UI
    #[arg(long)]
    print: bool,

    /// Log file path (default: terra.log, or TERRA_LOG_FILE)
    #[arg(long)]
    log_file: Option<String>,
}

/// Actions dispatched before the first frame, in order.
fn startup_actions(config: &ResolvedConfig, args: &Args) -> Vec<Action> {
    let mut actions = vec![match config.initial_region {
        Region::All => Action::LoadAll,
        region => Action::FilterRegion(region),
    }];

    if let Some(query) = &args.search {
        actions.push(Action::Search(query.clone()));
    }

    if let Some(target) = &args.open {
        let route = if target.starts_with('/') {
            Route::from_path(target)
        } else {
            Some(Route::detail(target))
        };
        match route {
            Some(Route::Detail { name }) => actions.push(Action::SelectCountry(name)),
            Some(Route::List) => {}
            None => warn!("Ignoring unreadable route {:?}", target),
        }
    }

    actions
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to terra.log in current directory
    let log_path = args
        .log_file
        .clone()
        .or_else(|| std::env::var("TERRA_LOG_FILE").ok())
        .unwrap_or_else(|| "terra.log".to_string());
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&log_path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    info!("Terra starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}; using default config", e);
        TerraConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url.clone(),
            no_borders: args.no_borders,
            region: args.region,
        },
    );
    info!("Border resolution: {}", resolved.resolve_borders);

    let settings_store = resolved.settings_path.clone().map(SettingsStore::new);
    let saved_theme = settings_store.as_ref().and_then(SettingsStore::load_theme);
    let theme = settings::startup_theme(
        saved_theme,
        settings::terminal_preference(),
        resolved.default_theme,
    );
    info!("Starting with theme {:?} (saved: {:?})", theme, saved_theme);

    let directory = Arc::new(RestCountriesDirectory::with_timeout(
        Some(resolved.base_url.clone()),
        resolved.request_timeout,
    ));
    info!("Using {} directory at {}", directory.name(), directory.base_url());
    let app = App::from_config(directory, &resolved, theme);
    let startup = startup_actions(&resolved, &args);

    if args.print {
        let mut driver = Driver::new(app, settings_store);
        for action in startup {
            driver.dispatch(action).await;
        }
        print!("{}", report::render(&driver.app));
        return Ok(());
    }

    tui::run(app, settings_store, startup)
}

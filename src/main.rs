use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use moviedeck::api::ApiClient;
use moviedeck::config::Config;
use moviedeck::location::{Location, LocationCarrier};
use moviedeck::ui::app::App;
use moviedeck::ui::nav::NavState;
use moviedeck::{logging, ui};

/// Terminal client for a movie recommendation service.
#[derive(Debug, Parser)]
#[command(name = "moviedeck", version, about)]
struct Cli {
    /// Shareable location to open at startup, e.g. "view=details&id=27205".
    #[arg(long)]
    location: Option<String>,

    /// Override the backend base URL from the config file.
    #[arg(long)]
    api_base: Option<String>,

    /// Use an explicit config file instead of the default path.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base) = cli.api_base {
        config.api.base_url = base;
        config.validate()?;
    }

    let api = ApiClient::from_config(&config.api).context("building API client")?;
    let carrier = LocationCarrier::at_default_path();

    // A deep link on the command line beats the stored session location.
    let location = cli
        .location
        .as_deref()
        .map(Location::parse)
        .or_else(|| carrier.load())
        .unwrap_or_default();
    let nav = NavState::from_location(&location);

    let app = App::new(api, carrier, &config, nav);
    ui::runtime::run(app).context("running UI")?;
    Ok(())
}

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use stockroom::LogLevel;
use stockroom::core::config::{self, CliOverrides};
use stockroom::tui;

#[derive(Parser)]
#[command(name = "stockroom", about = "Terminal inventory tracker")]
struct Args {
    /// Currency symbol shown before prices
    #[arg(short, long)]
    currency: Option<String>,

    /// Screen to open first: registration, listing, statistics, detail/<name>
    #[arg(short, long)]
    start: Option<String>,

    /// Log verbosity
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Config file (default: ~/.stockroom/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger isn't up yet, so config problems are collected and logged after.
    let (loaded, config_error) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => (loaded, None),
        Err(e) => (config::LoadedConfig::default(), Some(e)),
    };

    let cli = CliOverrides {
        currency_symbol: args.currency,
        start_route: args.start,
        log_level: args
            .log_level
            .map(|level| log::LevelFilter::from(level).to_string()),
    };
    let resolved = config::resolve(&loaded.config, &cli);

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Using default config: {}", e);
    }
    log::info!("Config source: {}", loaded.source);
    for note in loaded.notes.iter().chain(&resolved.notes) {
        log::warn!("{note}");
    }
    log::info!(
        "Stockroom starting on {} (currency {:?})",
        resolved.start_screen,
        resolved.currency_symbol
    );

    tui::run(resolved)
}

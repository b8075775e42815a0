//! heliops library root.
//! Exposes the CLI parser, the high-level run() function and the scheduling core.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::Level;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Duration { .. } | Commands::Odometer { .. } => {
            cli::commands::duration::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr so command output stays clean.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(offset) = &cli.utc_offset {
        cfg.utc_offset = offset.clone();
    }

    tracing::debug!(database = %cfg.database, zone = %cfg.zone_name, offset = %cfg.utc_offset, "configuration loaded");

    dispatch(&cli, &cfg)
}

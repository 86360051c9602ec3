//! clienttrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod roster;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Ingest { .. } => cli::commands::ingest::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Call { .. } => cli::commands::call::handle(&cli.command, cfg),
        Commands::Industry { .. } => cli::commands::industry::handle(&cli.command, cfg),
        Commands::Calls { .. } => cli::commands::calls::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Metrics { .. } => cli::commands::metrics::handle(&cli.command, cfg),
        Commands::Save => cli::commands::save::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1) parse CLI
    let cli = Cli::parse();

    // 2) load config ONCE
    let mut cfg = Config::load();

    // 3) apply command-line path overrides, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(people) = &cli.people_file {
        cfg.people_file = people.clone();
    }
    if let Some(companies) = &cli.companies_file {
        cfg.companies_file = companies.clone();
    }
    if let Some(updated) = &cli.updated_file {
        cfg.updated_people_file = updated.clone();
    }

    // 4) expand ~ in every configured path
    for path in [
        &mut cfg.database,
        &mut cfg.people_file,
        &mut cfg.companies_file,
        &mut cfg.updated_people_file,
    ] {
        *path = utils::path::expand_tilde(path).to_string_lossy().to_string();
    }

    // 5) hand everything to the dispatcher
    dispatch(&cli, &cfg)
}

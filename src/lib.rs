//! rworklog library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! store / report modules used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use db::store::Store;
use errors::AppResult;
use utils::path::resolve_db_path;

/// Open the configured database and run `f` against it.
fn with_store<F>(cfg: &Config, f: F) -> AppResult<()>
where
    F: FnOnce(&Store) -> AppResult<()>,
{
    let store = Store::open(&cfg.database)?;
    f(&store)
}

/// Central command dispatcher.
/// Commands that read or write entries get the store opened once here.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands;

    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
        Commands::Add { .. } => with_store(cfg, |s| commands::add::handle(cmd, cfg, s)),
        Commands::Show { .. } => with_store(cfg, |s| commands::show::handle(cmd, s)),
        Commands::Del { .. } => with_store(cfg, |s| commands::del::handle(cmd, s)),
        Commands::Export { .. } => with_store(cfg, |s| commands::export::handle(cmd, s)),
        Commands::Calendar { .. } => with_store(cfg, |s| commands::calendar::handle(cmd, s)),
        Commands::Db { .. } => with_store(cfg, |s| commands::db::handle(cmd, cfg, s)),
        Commands::Log { .. } => with_store(cfg, |s| commands::log::handle(cmd, s)),
        Commands::Backup { .. } => with_store(cfg, |s| commands::backup::handle(cmd, cfg, s)),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1) parse CLI
    let cli = Cli::parse();

    // 2) load config once
    let mut cfg = Config::load()?;

    // 3) command-line override of the database, resolved against the cwd
    //    so every command (init included) sees the same file
    if let Some(custom_db) = &cli.db {
        cfg.database = resolve_db_path(custom_db)?.to_string_lossy().to_string();
    }

    // 4) hand everything to the dispatcher
    dispatch(&cli, &cfg)
}

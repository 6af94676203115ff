//! punchclock library root.
//! Exposes the CLI parser, the high-level run() function and the punch-clock
//! core (time-status machine, permission engine, administrative operations).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::ClockIn(_)
        | Commands::ClockOut(_)
        | Commands::StartMeal(_)
        | Commands::EndMeal(_)
        | Commands::Last(_)
        | Commands::History(_) => commands::punch::handle(&cli.command, cfg),
        Commands::Roster(_) => commands::roster::handle(&cli.command, cfg),
        Commands::Employees { .. } => commands::employees::handle(&cli.command, cfg),
        Commands::Terminal => commands::terminal::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --data-dir moves every data file
    let mut cfg = Config::load()?;
    if let Some(dir) = &cli.data_dir {
        cfg.relocate(dir);
    }

    dispatch(&cli, &cfg)
}

// src/main.rs
use clap::Parser;
use std::error::Error;
use std::path::Path;

mod cli;
mod core;
mod generators;
mod history;
mod models;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::core::state::AppState;
use crate::history::HistoryStore;
use crate::models::GenerationOptions;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(path) = &args.history_file {
        config.history_file = path.clone();
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting PassForge - Password Generator");

    config.ensure_directories_exist();

    let mut state = AppState::new(
        config.default_options(),
        HistoryStore::load(&config.history_file),
    );

    if let Err(e) = run(args, &config, &mut state) {
        eprintln!("❌ {}", e);
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args, config: &Config, state: &mut AppState) -> Result<(), Box<dyn Error>> {
    match args.command {
        Some(CliCommand::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_numbers,
            no_symbols,
            exclude_ambiguous,
            save,
        }) => {
            let options = GenerationOptions {
                length: length.unwrap_or(config.default_length),
                include_lowercase: !no_lowercase,
                include_uppercase: !no_uppercase,
                include_numbers: !no_numbers,
                include_symbols: !no_symbols,
                exclude_ambiguous: exclude_ambiguous || config.default_exclude_ambiguous,
                pronounceable: false,
            };

            cli::handlers::handle_generate(state, options, save, args.json)
        }
        Some(CliCommand::Pronounceable {
            length,
            numbers,
            uppercase,
            symbols,
            save,
        }) => {
            let options = GenerationOptions {
                length: length.unwrap_or(config.default_length),
                include_lowercase: true,
                include_uppercase: uppercase,
                include_numbers: numbers,
                include_symbols: symbols,
                exclude_ambiguous: false,
                pronounceable: true,
            };

            cli::handlers::handle_generate(state, options, save, args.json)
        }
        Some(CliCommand::Score { password }) => cli::handlers::handle_score(&password, args.json),
        Some(CliCommand::History { limit }) => {
            cli::handlers::handle_history(state, limit, args.json)
        }
        None => cli::menu::run_cli_menu(state),
    }
}

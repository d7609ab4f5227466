use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use crate::app::App;
use crate::cli::{Cli, Commands};
use crate::localizer::Localizer;
use crate::settings::SettingsStore;

mod app;
mod cli;
mod commands;
mod error;
mod interactive;
mod localizer;
mod project;
mod settings;
mod utils;

fn main() -> ExitCode {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match process_args(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn start_app(store: SettingsStore, localizer: Localizer) -> Result<App> {
    info!("settings file: {}", store.path().display());
    let locales_dir = localizer.locales_dir().display().to_string();

    App::start(store, localizer)
        .with_context(|| format!("failed to load locales from: {}", locales_dir))
}

fn process_args(args: Cli) -> Result<()> {
    let localizer = Localizer::new(&args.locales_dir);
    let store = match args.settings_file {
        Some(path) => SettingsStore::at(&path),
        None => SettingsStore::new(),
    };

    match args.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => interactive::show_interactive(&mut start_app(store, localizer)?),
        Commands::Create {
            name,
            date,
            dry_run,
        } => commands::create_project(&mut start_app(store, localizer)?, &name, date, dry_run),
        Commands::Language { name: None } => commands::list_languages(&start_app(store, localizer)?),
        Commands::Language { name: Some(name) } => {
            commands::set_language(&mut start_app(store, localizer)?, &name)
        }
        Commands::Config => commands::show_config(&start_app(store, localizer)?),
        Commands::Locales { init } => commands::show_locales(&localizer, init),
    }
}

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "hierarchy-maker",
    about = "Create dated project folder hierarchies",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding language_codes.json and the translation files
    #[arg(
        short = 'L',
        long = "locales-dir",
        value_name = "DIR",
        default_value = "locales",
        global = true
    )]
    pub locales_dir: PathBuf,

    /// Use <FILE> instead of ~/HierarchyMaker.json
    #[arg(short = 's', long = "settings", value_name = "FILE", global = true)]
    pub settings_file: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive form (default)
    #[command(name = "interactive", alias = "i")]
    Interactive,
    /// Create a new project folder under today's date
    #[command(name = "create", alias = "new")]
    Create {
        /// Name of the project folder
        name: String,

        /// Create the project under <DATE> instead of today
        #[arg(short, long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,

        /// Print the target path without creating anything
        #[arg(short = 'n', long = "dry-run")]
        dry_run: bool,
    },
    /// List available languages, or switch to <NAME>
    #[command(name = "language", alias = "lang")]
    Language {
        /// Display name of the language, as listed
        name: Option<String>,
    },
    /// Output current settings
    #[command(name = "config", alias = "conf")]
    Config,
    /// Output the locales directory and its languages
    #[command(name = "locales")]
    Locales {
        /// Write the bundled locale files first (existing files are kept)
        #[arg(long)]
        init: bool,
    },
}

//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueHint};

/// Desktop portfolio manager backend: document references, asset folders, preferences
#[derive(Parser, Debug)]
#[command(name = "foliodesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Attach a document to a portfolio entity
    Attach {
        /// Document root directory of the portfolio
        #[arg(long, value_hint = ValueHint::DirPath)]
        root: String,

        /// Entity document folder (absolute, or relative to the root)
        #[arg(long)]
        folder: Option<String>,
    },

    /// Assign or create an entity's document folder
    Folder {
        /// Document root directory of the portfolio
        #[arg(long, value_hint = ValueHint::DirPath)]
        root: String,

        /// Currently assigned folder value, if any
        #[arg(long)]
        current: Option<String>,

        /// Entity name to derive a folder name from
        #[arg(long)]
        name: Option<String>,
    },

    /// Manage preferences
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Open a file or folder with the system default application
    Open {
        /// Path to open
        #[arg(value_hint = ValueHint::AnyPath)]
        path: String,
    },

    /// Show version
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective preferences as JSON
    Show,
    /// Print the preferences file location
    Path,
    /// Write current effective preferences to the config file
    Init,
}

//! Command dispatch: wires the container and invokes one operation per run

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::config::{preferences_path, Preferences};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Attach { root, folder }) => attach(root, folder.as_deref()),
        Some(Commands::Folder {
            root,
            current,
            name,
        }) => folder(root, current.as_deref(), name.as_deref()),
        Some(Commands::Config { command }) => config(command),
        Some(Commands::Open { path }) => open(path),
        Some(Commands::Info) => info(),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Ok(()),
    }
}

/// Expand `~` and `$VAR` in a user-supplied path.
fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::full(path).map_or_else(|_| path.to_string(), |p| p.into_owned()))
}

#[instrument]
fn attach(root: &str, folder: Option<&str>) -> CliResult<()> {
    let root = expand(root);
    let folder = folder.map(expand);
    debug!("root: {:?}, folder: {:?}", root, folder);

    let container = ServiceContainer::new();
    match container
        .documents
        .choose_document(&root, folder.as_deref())?
    {
        Some(reference) => println!("{}", reference.as_stored()),
        None => eprintln!("{}", "No document selected.".yellow()),
    }
    Ok(())
}

#[instrument]
fn folder(root: &str, current: Option<&str>, name: Option<&str>) -> CliResult<()> {
    let root = expand(root);
    let current = current.map(expand).unwrap_or_default();
    debug!("root: {:?}, current: {:?}, name: {:?}", root, current, name);

    let container = ServiceContainer::new();
    let value = container.documents.choose_or_create_folder(
        &root,
        &current.to_string_lossy(),
        name.unwrap_or_default(),
    )?;
    if value.is_empty() {
        eprintln!("{}", "No folder assigned.".yellow());
    } else {
        println!("{value}");
    }
    Ok(())
}

#[instrument]
fn config(command: &ConfigCommands) -> CliResult<()> {
    let container = ServiceContainer::new();
    match command {
        ConfigCommands::Show => {
            let prefs = Preferences::load(container.fs.as_ref())?;
            println!("{}", prefs.to_json()?);
        }
        ConfigCommands::Path => match preferences_path() {
            Some(path) => println!("{}", path.display()),
            None => eprintln!("{}", "No config directory on this platform.".yellow()),
        },
        ConfigCommands::Init => {
            let prefs = Preferences::load(container.fs.as_ref())?;
            let path = prefs.save(container.fs.as_ref())?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

#[instrument]
fn open(path: &str) -> CliResult<()> {
    let path = expand(path);
    let container = ServiceContainer::new();
    container.controller().open_external(Path::new(&path))?;
    Ok(())
}

fn info() -> CliResult<()> {
    println!("foliodesk {}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = preferences_path() {
        println!("preferences: {}", path.display());
    }
    Ok(())
}

fn completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with scripted implementations. `Interaction` stands in for
//! the GUI toolkit's native dialogs; the shipped implementation is
//! terminal-backed.

use std::io;
use std::path::{Path, PathBuf};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy file from source to destination, replacing the destination.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

/// User dialog abstraction: file picker, directory picker, confirmation.
///
/// Cancellation is `Ok(None)` (or `Ok(false)` for confirm declines), never an
/// error; `Err` means the dialog layer itself failed.
pub trait Interaction: Send + Sync {
    /// Let the user pick a file, starting in `start_dir`.
    fn pick_file(&self, title: &str, start_dir: Option<&Path>)
        -> Result<Option<PathBuf>, String>;

    /// Let the user pick a directory, starting in `start_dir`.
    fn pick_directory(
        &self,
        title: &str,
        start_dir: Option<&Path>,
    ) -> Result<Option<PathBuf>, String>;

    /// Ask a yes/no question; the default answer is No.
    fn confirm(&self, title: &str, message: &str) -> Result<bool, String>;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Start a command detached, without waiting for it to finish.
    fn spawn(&self, cmd: &str, args: &[&str]) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        std::fs::copy(from, to)
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn spawn(&self, cmd: &str, args: &[&str]) -> io::Result<()> {
        std::process::Command::new(cmd).args(args).spawn().map(|_| ())
    }
}

/// Terminal-backed dialogs: skim fuzzy picker for paths, dialoguer for
/// confirmation. Stands in for the GUI toolkit's native dialog boxes.
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl TerminalInteraction {
    /// Present entries through skim, mapping the selection back to a path.
    ///
    /// Display strings are relative to `base`; `Ok(None)` on Esc/abort or
    /// when there is nothing to pick.
    fn pick_from(
        &self,
        entries: &[PathBuf],
        base: &Path,
        prompt: &str,
    ) -> Result<Option<PathBuf>, String> {
        use skim::prelude::*;
        use std::io::Cursor;

        if entries.is_empty() {
            return Ok(None);
        }

        let displays: Vec<String> = entries
            .iter()
            .map(|p| match p.strip_prefix(base) {
                Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
                _ if p == base => ".".to_string(),
                _ => p.display().to_string(),
            })
            .collect();
        let input = displays.join("\n");

        let prompt = format!("{prompt}> ");
        let options = SkimOptionsBuilder::default()
            .prompt(Some(prompt.as_str()))
            .height(Some("50%"))
            .multi(false)
            .build()
            .map_err(|e| format!("failed to build skim options: {e}"))?;

        let item_reader = SkimItemReader::default();
        let items = item_reader.of_bufread(Cursor::new(input));

        let output = Skim::run_with(&options, Some(items));

        match output {
            Some(out) if out.is_abort => Ok(None),
            Some(out) => match out.selected_items.first() {
                Some(selected) => {
                    let display = selected.output().to_string();
                    let idx = displays.iter().position(|d| *d == display);
                    Ok(idx.map(|i| entries[i].clone()))
                }
                None => Ok(None),
            },
            None => Ok(None),
        }
    }
}

impl Interaction for TerminalInteraction {
    fn pick_file(
        &self,
        title: &str,
        start_dir: Option<&Path>,
    ) -> Result<Option<PathBuf>, String> {
        let base = existing_base(start_dir);
        let mut entries: Vec<PathBuf> = walkdir::WalkDir::new(&base)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();
        entries.sort();
        self.pick_from(&entries, &base, title)
    }

    fn pick_directory(
        &self,
        title: &str,
        start_dir: Option<&Path>,
    ) -> Result<Option<PathBuf>, String> {
        let base = existing_base(start_dir);
        let mut entries: Vec<PathBuf> = walkdir::WalkDir::new(&base)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .map(|e| e.path().to_path_buf())
            .collect();
        entries.sort();
        self.pick_from(&entries, &base, title)
    }

    fn confirm(&self, title: &str, message: &str) -> Result<bool, String> {
        dialoguer::Confirm::new()
            .with_prompt(format!("{title}: {message}"))
            .default(false)
            .interact()
            .map_err(|e| e.to_string())
    }
}

/// Nearest existing directory at or above `start_dir`; cwd as a last resort.
///
/// Dialog start directories may not exist yet (an assigned folder nothing was
/// ever copied into), and the picker needs somewhere real to enumerate.
fn existing_base(start_dir: Option<&Path>) -> PathBuf {
    if let Some(start) = start_dir {
        let mut candidate = start;
        loop {
            if candidate.is_dir() {
                return candidate.to_path_buf();
            }
            match candidate.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => candidate = parent,
                _ => break,
            }
        }
    }
    PathBuf::from(".")
}

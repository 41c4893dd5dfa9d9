//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("no relative path from {base} to {target}")]
    NoRelativePath { base: PathBuf, target: PathBuf },

    #[error("path has no file name: {0}")]
    MissingFileName(PathBuf),
}

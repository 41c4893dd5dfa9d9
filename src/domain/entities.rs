//! Domain entities: core data structures

use std::path::{Path, PathBuf};

/// A resolved reference to a document attached to a portfolio entity.
///
/// The stored (legacy) form is a single untagged string whose meaning depends
/// on what was configured when it was produced: relative to the entity's
/// document folder, relative to the document root, or absolute. The tagged
/// variants make that explicit; [`DocumentReference::as_stored`] renders the
/// exact legacy string, and [`DocumentReference::from_stored`] re-derives the
/// tag from a legacy string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentReference {
    /// Path relative to the entity's document folder.
    FolderRelative(PathBuf),
    /// Path relative to the document root (no folder assigned).
    RootRelative(PathBuf),
    /// Absolute path, possibly outside the managed tree.
    Absolute(PathBuf),
}

impl DocumentReference {
    /// The untagged string form, byte-for-byte what the legacy format persisted.
    pub fn as_stored(&self) -> String {
        match self {
            Self::FolderRelative(p) | Self::RootRelative(p) | Self::Absolute(p) => {
                p.to_string_lossy().into_owned()
            }
        }
    }

    /// Join the reference back to an absolute path.
    ///
    /// `folder` is the entity's document folder as stored: absolute, or
    /// relative to `root`. A `FolderRelative` reference without a folder
    /// degrades to root-relative (the folder was dissociated after the
    /// reference was stored).
    pub fn resolve(&self, root: &Path, folder: Option<&Path>) -> PathBuf {
        match self {
            Self::Absolute(p) => p.clone(),
            Self::RootRelative(p) => root.join(p),
            Self::FolderRelative(p) => match folder {
                Some(f) => effective_folder(root, f).join(p),
                None => root.join(p),
            },
        }
    }

    /// Re-derive the tag from a legacy untagged string.
    ///
    /// Applies the legacy read heuristic: an absolute string is `Absolute`;
    /// otherwise the string is tried relative to the entity folder (when one
    /// is assigned and the joined path exists), then relative to the root.
    /// When neither probe hits, the folder interpretation wins if a folder is
    /// assigned, so a later copy into the folder makes the reference valid.
    pub fn from_stored(
        stored: &str,
        root: &Path,
        folder: Option<&Path>,
        exists: impl Fn(&Path) -> bool,
    ) -> Self {
        let path = Path::new(stored);
        if path.is_absolute() {
            return Self::Absolute(path.to_path_buf());
        }

        let folder = folder.filter(|f| !f.as_os_str().is_empty());
        if let Some(f) = folder {
            if exists(&effective_folder(root, f).join(path)) {
                return Self::FolderRelative(path.to_path_buf());
            }
        }
        if exists(&root.join(path)) {
            return Self::RootRelative(path.to_path_buf());
        }

        if folder.is_some() {
            Self::FolderRelative(path.to_path_buf())
        } else {
            Self::RootRelative(path.to_path_buf())
        }
    }
}

/// Absolute form of a stored document folder value.
fn effective_folder(root: &Path, folder: &Path) -> PathBuf {
    if folder.is_absolute() {
        folder.to_path_buf()
    } else {
        root.join(folder)
    }
}

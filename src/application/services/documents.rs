//! Document attachment service
//!
//! The two resolver operations that reconcile the document root, an entity's
//! document folder, and a user-picked path: attaching a document to an entity
//! (with an optional copy into the managed tree) and assigning or creating
//! the entity's document folder.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{sanitize_name, DocumentReference, DomainError};
use crate::infrastructure::traits::{FileSystem, Interaction};
use crate::util::path::{is_outside, relative_to};

/// Service for resolving document references and entity folders.
///
/// All dialog traffic goes through the injected [`Interaction`] so the state
/// machines are testable headlessly with scripted fakes.
pub struct DocumentService {
    fs: Arc<dyn FileSystem>,
    ui: Arc<dyn Interaction>,
}

impl DocumentService {
    pub fn new(fs: Arc<dyn FileSystem>, ui: Arc<dyn Interaction>) -> Self {
        Self { fs, ui }
    }

    /// Let the user pick a document for an entity and resolve it against the
    /// root/folder pair.
    ///
    /// `folder` is the entity's stored document folder: absolute, or relative
    /// to `root`; `None` (or empty) when no folder is assigned. Returns
    /// `Ok(None)` when the user cancels the picker.
    ///
    /// When the picked file lies outside the entity folder the user is
    /// offered a copy into it. Note that the copy derives its destination as
    /// `folder/basename(picked)` without a collision check: an existing file
    /// of the same name is silently overwritten.
    pub fn choose_document(
        &self,
        root: &Path,
        folder: Option<&Path>,
    ) -> ApplicationResult<Option<DocumentReference>> {
        let folder = folder.filter(|f| !f.as_os_str().is_empty());
        let effective = folder.map(|f| effective_folder(root, f));
        debug!(
            "choose_document: root={}, folder={:?}",
            root.display(),
            effective.as_deref()
        );

        let start = effective.as_deref().unwrap_or(root);
        let picked = match self
            .ui
            .pick_file("Select Document", Some(start))
            .map_err(|e| ApplicationError::interaction("select document", e))?
        {
            Some(p) => p,
            None => return Ok(None),
        };
        debug!("choose_document: picked={}", picked.display());

        let effective = match effective {
            Some(f) => f,
            None => {
                // No folder assigned: prefer root-relative, fall back to absolute.
                if !root.as_os_str().is_empty() {
                    if let Some(rel) = relative_to(root, &picked) {
                        return Ok(Some(DocumentReference::RootRelative(rel)));
                    }
                }
                return Ok(Some(DocumentReference::Absolute(picked)));
            }
        };

        if let Some(rel) = relative_to(&effective, &picked) {
            if !is_outside(&rel) {
                // Already inside the managed folder.
                return Ok(Some(DocumentReference::FolderRelative(rel)));
            }
        }

        let copy = self
            .ui
            .confirm("Copy Document", "Copy file to asset folder?")
            .map_err(|e| ApplicationError::interaction("copy document", e))?;

        if !copy {
            // Keep the user's selection even though it leaves the managed tree.
            return Ok(Some(match relative_to(&effective, &picked) {
                Some(rel) => DocumentReference::FolderRelative(rel),
                None => DocumentReference::Absolute(picked),
            }));
        }

        self.fs
            .create_dir_all(&effective)
            .with_path_context("create document folder", &effective)?;

        let basename = picked
            .file_name()
            .map(PathBuf::from)
            .ok_or_else(|| DomainError::MissingFileName(picked.clone()))?;
        let destination = effective.join(&basename);
        self.fs
            .copy(&picked, &destination)
            .with_path_context("copy document", &picked)?;
        debug!("choose_document: copied to {}", destination.display());

        Ok(Some(DocumentReference::FolderRelative(basename)))
    }

    /// Assign or create the document folder for an entity.
    ///
    /// `current` is the entity's stored folder value (empty when none is
    /// assigned); `suggested_name` is free text, usually the entity name,
    /// sanitized into a candidate folder name. Returns the new stored value:
    /// relative to `root` unless the user deliberately navigated outside it.
    ///
    /// Cancellation never changes state: with a current value it returns that
    /// value, otherwise the empty string. A folder is only ever created after
    /// explicit confirmation.
    pub fn choose_or_create_folder(
        &self,
        root: &Path,
        current: &str,
        suggested_name: &str,
    ) -> ApplicationResult<String> {
        debug!(
            "choose_or_create_folder: root={}, current={:?}, suggested={:?}",
            root.display(),
            current,
            suggested_name
        );

        if !current.is_empty() {
            // Re-assignment: start where the current folder lives.
            let start = effective_folder(root, Path::new(current));
            return match self.pick_directory(&start)? {
                Some(picked) => Ok(folder_reference(root, &picked)),
                None => Ok(current.to_string()),
            };
        }

        let sanitized = sanitize_name(suggested_name);
        if sanitized.is_empty() {
            return self.pick_folder_plain(root);
        }

        let candidate = root.join(&sanitized);
        if self.fs.exists(&candidate) {
            // The derived folder already exists; let the user confirm it or
            // navigate elsewhere.
            return match self.pick_directory(&candidate)? {
                Some(picked) => Ok(folder_reference(root, &picked)),
                None => Ok(String::new()),
            };
        }

        let create = self
            .ui
            .confirm("Create Folder", &format!("Create folder '{sanitized}'?"))
            .map_err(|e| ApplicationError::interaction("create folder", e))?;
        if create {
            self.fs
                .create_dir_all(&candidate)
                .with_path_context("create folder", &candidate)?;
            debug!("choose_or_create_folder: created {}", candidate.display());
            return Ok(sanitized);
        }

        self.pick_folder_plain(root)
    }

    /// Plain directory picker rooted at `root`; cancellation yields "".
    fn pick_folder_plain(&self, root: &Path) -> ApplicationResult<String> {
        match self.pick_directory(root)? {
            Some(picked) => Ok(folder_reference(root, &picked)),
            None => Ok(String::new()),
        }
    }

    fn pick_directory(&self, start: &Path) -> ApplicationResult<Option<PathBuf>> {
        self.ui
            .pick_directory("Select Document Folder", Some(start))
            .map_err(|e| ApplicationError::interaction("select document folder", e))
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

/// Stored folder value for a picked directory: relative to `root` when the
/// pick stays inside it, the absolute path otherwise.
fn folder_reference(root: &Path, picked: &Path) -> String {
    match relative_to(root, picked) {
        Some(rel) if !is_outside(&rel) => {
            if rel.as_os_str().is_empty() {
                // The root itself was picked.
                ".".to_string()
            } else {
                rel.to_string_lossy().into_owned()
            }
        }
        _ => picked.to_string_lossy().into_owned(),
    }
}

//! Application controller: shell state and thin file-op passthroughs
//!
//! One controller instance lives for the process lifetime. It owns the
//! close-request handshake the frontend uses to veto a window close while
//! unsaved changes exist, and the small file operations the frontend calls
//! directly.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::DomainError;
use crate::infrastructure::traits::{CommandRunner, FileSystem};
use crate::util::path::relative_to;

pub struct AppController {
    fs: Arc<dyn FileSystem>,
    cmd: Arc<dyn CommandRunner>,
    close_requested: bool,
}

impl AppController {
    pub fn new(fs: Arc<dyn FileSystem>, cmd: Arc<dyn CommandRunner>) -> Self {
        Self {
            fs,
            cmd,
            close_requested: false,
        }
    }

    /// Register a close request.
    ///
    /// The first call arms the deferral and returns `false`: the shell must
    /// hold the close and let the frontend check dirty state. A call with the
    /// deferral armed returns `true`: proceed with the close.
    pub fn request_close(&mut self) -> bool {
        if self.close_requested {
            return true;
        }
        self.close_requested = true;
        false
    }

    /// Cancel a pending close (the user chose to stay).
    pub fn reset_close(&mut self) {
        self.close_requested = false;
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn read_file(&self, path: &Path) -> ApplicationResult<String> {
        self.fs
            .read_to_string(path)
            .with_path_context("read file", path)
    }

    pub fn write_file(&self, path: &Path, content: &str) -> ApplicationResult<()> {
        self.fs.write(path, content).with_path_context("write file", path)
    }

    pub fn file_exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }

    pub fn copy_file(&self, src: &Path, dst: &Path) -> ApplicationResult<()> {
        self.fs
            .copy(src, dst)
            .map(|_| ())
            .with_path_context("copy file", src)
    }

    pub fn create_directory(&self, path: &Path) -> ApplicationResult<()> {
        self.fs
            .create_dir_all(path)
            .with_path_context("create directory", path)
    }

    /// Relative path from `base` to `target`; errors when none exists.
    pub fn relative_path(&self, base: &Path, target: &Path) -> ApplicationResult<PathBuf> {
        relative_to(base, target).ok_or_else(|| {
            DomainError::NoRelativePath {
                base: base.to_path_buf(),
                target: target.to_path_buf(),
            }
            .into()
        })
    }

    /// Directory portion of a file path ("." when there is none).
    pub fn dir_of_file(&self, path: &Path) -> PathBuf {
        match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Open a file or folder with the OS default application.
    pub fn open_external(&self, path: &Path) -> ApplicationResult<()> {
        let target = path.to_string_lossy();
        debug!("open_external: {}", target);
        let result = match std::env::consts::OS {
            "macos" => self.cmd.spawn("open", &[&target]),
            "windows" => self.cmd.spawn("cmd", &["/c", "start", "", &target]),
            _ => self.cmd.spawn("xdg-open", &[&target]),
        };
        result.with_path_context("open external", path)
    }
}

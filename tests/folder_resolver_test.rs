//! Tests for DocumentService::choose_or_create_folder

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use foliodesk::application::services::DocumentService;
use foliodesk::infrastructure::traits::{FileSystem, Interaction, RealFileSystem};

/// Scripted dialog fake for directory picking and confirmation.
#[derive(Default)]
struct ScriptedInteraction {
    dirs: Mutex<VecDeque<Option<PathBuf>>>,
    confirms: Mutex<VecDeque<bool>>,
    dir_starts: Mutex<Vec<PathBuf>>,
}

impl ScriptedInteraction {
    fn script_dir(&self, pick: Option<&Path>) {
        self.dirs
            .lock()
            .unwrap()
            .push_back(pick.map(Path::to_path_buf));
    }

    fn script_confirm(&self, answer: bool) {
        self.confirms.lock().unwrap().push_back(answer);
    }
}

impl Interaction for ScriptedInteraction {
    fn pick_file(
        &self,
        _title: &str,
        _start_dir: Option<&Path>,
    ) -> Result<Option<PathBuf>, String> {
        panic!("unscripted pick_file call");
    }

    fn pick_directory(
        &self,
        _title: &str,
        start_dir: Option<&Path>,
    ) -> Result<Option<PathBuf>, String> {
        self.dir_starts
            .lock()
            .unwrap()
            .push(start_dir.map(Path::to_path_buf).unwrap_or_default());
        Ok(self
            .dirs
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted pick_directory call"))
    }

    fn confirm(&self, _title: &str, _message: &str) -> Result<bool, String> {
        Ok(self
            .confirms
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted confirm call"))
    }
}

/// Filesystem wrapper recording directory creation.
#[derive(Default)]
struct RecordingFs {
    inner: RealFileSystem,
    mkdirs: Mutex<Vec<PathBuf>>,
}

impl FileSystem for RecordingFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.inner.read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.inner.write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.mkdirs.lock().unwrap().push(path.to_path_buf());
        self.inner.create_dir_all(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        self.inner.copy(from, to)
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        self.inner.ensure_parent(path)
    }
}

fn service(ui: Arc<ScriptedInteraction>, fs: Arc<RecordingFs>) -> DocumentService {
    DocumentService::new(fs, ui)
}

#[test]
fn given_current_value_when_picking_new_directory_then_returns_root_relative() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    std::fs::create_dir_all(root.join("fund-a")).unwrap();
    std::fs::create_dir_all(root.join("fund-b")).unwrap();

    let ui = Arc::new(ScriptedInteraction::default());
    ui.script_dir(Some(&root.join("fund-b")));
    let svc = service(ui.clone(), Arc::new(RecordingFs::default()));

    let value = svc.choose_or_create_folder(root, "fund-a", "").unwrap();

    assert_eq!(value, "fund-b");
    // Picker started where the current folder lives.
    assert_eq!(ui.dir_starts.lock().unwrap()[0], root.join("fund-a"));
}

#[test]
fn given_current_value_when_cancelling_then_current_unchanged() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    std::fs::create_dir_all(root.join("fund-a")).unwrap();

    let ui = Arc::new(ScriptedInteraction::default());
    ui.script_dir(None);
    let svc = service(ui, Arc::new(RecordingFs::default()));

    let value = svc.choose_or_create_folder(root, "fund-a", "ignored").unwrap();

    assert_eq!(value, "fund-a");
}

#[test]
fn given_current_value_when_picking_outside_root_then_absolute_value() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    std::fs::create_dir_all(root.join("fund-a")).unwrap();
    let outside = TempDir::new().unwrap();

    let ui = Arc::new(ScriptedInteraction::default());
    ui.script_dir(Some(outside.path()));
    let svc = service(ui, Arc::new(RecordingFs::default()));

    let value = svc.choose_or_create_folder(root, "fund-a", "").unwrap();

    assert_eq!(value, outside.path().to_string_lossy());
}

#[test]
fn given_unusable_suggestion_when_resolving_then_plain_picker_without_creation() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    std::fs::create_dir_all(root.join("documents")).unwrap();

    let ui = Arc::new(ScriptedInteraction::default());
    ui.script_dir(Some(&root.join("documents")));
    let fs = Arc::new(RecordingFs::default());
    let svc = service(ui.clone(), fs.clone());

    // "!!!" sanitizes to "": no candidate, no creation offer.
    let value = svc.choose_or_create_folder(root, "", "!!!").unwrap();

    assert_eq!(value, "documents");
    assert!(fs.mkdirs.lock().unwrap().is_empty());
    assert_eq!(ui.dir_starts.lock().unwrap()[0], root);
}

#[test]
fn given_unusable_suggestion_when_cancelling_then_empty_value() {
    let temp = TempDir::new().unwrap();

    let ui = Arc::new(ScriptedInteraction::default());
    ui.script_dir(None);
    let svc = service(ui, Arc::new(RecordingFs::default()));

    let value = svc.choose_or_create_folder(temp.path(), "", "   ").unwrap();

    assert_eq!(value, "");
}

#[test]
fn given_existing_candidate_when_resolving_then_picker_starts_there_without_confirm() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let candidate = root.join("my-fund-ii");
    std::fs::create_dir_all(&candidate).unwrap();

    let ui = Arc::new(ScriptedInteraction::default());
    ui.script_dir(Some(&candidate));
    let fs = Arc::new(RecordingFs::default());
    let svc = service(ui.clone(), fs.clone());

    let value = svc.choose_or_create_folder(root, "", "My Fund II").unwrap();

    assert_eq!(value, "my-fund-ii");
    // Existing candidate: no creation dialog, no mkdir.
    assert!(fs.mkdirs.lock().unwrap().is_empty());
    assert_eq!(ui.dir_starts.lock().unwrap()[0], candidate);
}

#[test]
fn given_new_candidate_when_confirming_creation_then_single_mkdir_and_relative_name() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let ui = Arc::new(ScriptedInteraction::default());
    ui.script_confirm(true);
    let fs = Arc::new(RecordingFs::default());
    let svc = service(ui, fs.clone());

    let value = svc.choose_or_create_folder(root, "", "My Fund II").unwrap();

    assert_eq!(value, "my-fund-ii");
    let mkdirs = fs.mkdirs.lock().unwrap();
    assert_eq!(mkdirs.len(), 1, "exactly one mkdir call");
    assert_eq!(mkdirs[0], root.join("my-fund-ii"));
    assert!(root.join("my-fund-ii").is_dir());
}

#[test]
fn given_new_candidate_when_declining_creation_then_plain_picker_and_no_mkdir() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    std::fs::create_dir_all(root.join("alt")).unwrap();

    let ui = Arc::new(ScriptedInteraction::default());
    ui.script_confirm(false);
    ui.script_dir(Some(&root.join("alt")));
    let fs = Arc::new(RecordingFs::default());
    let svc = service(ui.clone(), fs.clone());

    let value = svc.choose_or_create_folder(root, "", "My Fund II").unwrap();

    assert_eq!(value, "alt");
    assert!(fs.mkdirs.lock().unwrap().is_empty());
    assert!(!root.join("my-fund-ii").exists());
    // Fallback picker is rooted at the document root.
    assert_eq!(ui.dir_starts.lock().unwrap()[0], root);
}

#[test]
fn given_new_candidate_when_declining_then_cancelling_then_empty_value() {
    let temp = TempDir::new().unwrap();

    let ui = Arc::new(ScriptedInteraction::default());
    ui.script_confirm(false);
    ui.script_dir(None);
    let fs = Arc::new(RecordingFs::default());
    let svc = service(ui, fs.clone());

    let value = svc
        .choose_or_create_folder(temp.path(), "", "My Fund II")
        .unwrap();

    assert_eq!(value, "");
    assert!(fs.mkdirs.lock().unwrap().is_empty());
}

#[test]
fn given_root_itself_picked_when_resolving_then_dot_value() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let ui = Arc::new(ScriptedInteraction::default());
    ui.script_dir(Some(root));
    let svc = service(ui, Arc::new(RecordingFs::default()));

    let value = svc.choose_or_create_folder(root, "", "").unwrap();

    assert_eq!(value, ".");
}

//! Recursive folder walk and run accounting.
//!
//! For every folder the walk first recurses into each subfolder, then runs
//! the [`filter`](crate::filter) pipeline over the folder's own files:
//!
//! ```text
//! root/
//! ├── a/            ← 1. a's subfolders, then a's files
//! │   └── deep/     ←    (deep before a)
//! ├── b/            ← 2. b
//! └── *.jpg         ← 3. root's own files last
//! ```
//!
//! ## Counters
//!
//! | Field | Counts |
//! |---|---|
//! | `total_folders` | folders with at least one file (empty folders are walked, not counted) |
//! | `total_files` | every file seen in those folders, whatever its outcome |
//! | `deleted_files` | files decided [`Decision::Deleted`], including in debug mode |
//! | `failed_deletions` | removal calls that returned an error |
//!
//! Debug mode runs the whole pipeline and counts would-be deletions without
//! calling the remover, so a dry run reports the same `deleted_files` a real
//! run would.
//!
//! ## Events
//!
//! Nothing here prints. Pass a `Sender<ZapEvent>` to observe the walk;
//! [`output`](crate::output) renders events for the CLI.

use crate::config::ZapConfig;
use crate::filter::{self, Decision};
use crate::imaging::{ImageInspector, RustInspector};
use crate::remover::{DeleteMode, FileRemover, Removal, SystemRemover};
use serde::{Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZapError {
    #[error("Path required")]
    InvalidInput,
    #[error("Folder does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
}

/// Totals for one run. Fresh for every call to [`process`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub total_folders: u64,
    pub total_files: u64,
    pub deleted_files: u64,
    pub failed_deletions: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}

/// Progress events emitted during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZapEvent {
    /// A folder with files is about to be evaluated.
    FolderStarted { path: PathBuf, file_count: usize },
    /// One file went through the pipeline.
    FileEvaluated { path: PathBuf, decision: Decision },
    /// The trash refused a soft delete; the file was removed permanently.
    SoftDeleteFellBack { path: PathBuf, reason: String },
    /// The remover failed. The file still counts as deleted.
    DeleteFailed { path: PathBuf, error: String },
    /// A folder could not be listed and was skipped.
    FolderUnreadable { path: PathBuf, error: String },
    /// A file's size could not be read; it is treated as uninspectable.
    FileUnreadable { path: PathBuf, error: String },
}

/// Walk `root` with the real inspector and remover.
pub fn process(
    root: &Path,
    config: &ZapConfig,
    events: Option<Sender<ZapEvent>>,
) -> Result<RunResult, ZapError> {
    process_with(
        &RustInspector::new(),
        &SystemRemover::new(),
        root,
        config,
        events,
    )
}

/// Walk `root` with the given capabilities (allows testing with mocks).
pub fn process_with(
    inspector: &impl ImageInspector,
    remover: &impl FileRemover,
    root: &Path,
    config: &ZapConfig,
    events: Option<Sender<ZapEvent>>,
) -> Result<RunResult, ZapError> {
    if root.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(ZapError::InvalidInput);
    }
    if !root.is_dir() {
        return Err(ZapError::PathNotFound(root.to_path_buf()));
    }

    let mut walk = Walk {
        inspector,
        remover,
        config,
        mode: DeleteMode::from_hard_delete(config.hard_delete),
        events,
        result: RunResult::default(),
    };

    let start = Instant::now();
    walk.folder(root);
    walk.result.elapsed = start.elapsed();

    Ok(walk.result)
}

/// State for a single walk. Owned by one `process_with` call.
struct Walk<'a, I, R> {
    inspector: &'a I,
    remover: &'a R,
    config: &'a ZapConfig,
    mode: DeleteMode,
    events: Option<Sender<ZapEvent>>,
    result: RunResult,
}

impl<I: ImageInspector, R: FileRemover> Walk<'_, I, R> {
    fn emit(&self, event: ZapEvent) {
        if let Some(tx) = &self.events {
            // A dropped receiver only means nobody is listening.
            let _ = tx.send(event);
        }
    }

    fn folder(&mut self, path: &Path) {
        let (subdirs, files) = match list_folder(path) {
            Ok(listing) => listing,
            Err(e) => {
                self.emit(ZapEvent::FolderUnreadable {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                });
                return;
            }
        };

        for subdir in &subdirs {
            self.folder(subdir);
        }

        if files.is_empty() {
            return;
        }

        self.emit(ZapEvent::FolderStarted {
            path: path.to_path_buf(),
            file_count: files.len(),
        });
        self.result.total_folders += 1;
        self.result.total_files += files.len() as u64;

        for file in &files {
            self.file(file);
        }
    }

    fn file(&mut self, path: &Path) {
        let decision = match fs::metadata(path) {
            Ok(meta) => filter::evaluate(self.inspector, path, meta.len(), self.config),
            Err(e) => {
                self.emit(ZapEvent::FileUnreadable {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                });
                Decision::SkippedUnsupportedFormat
            }
        };

        let deleted = decision.is_deleted();
        self.emit(ZapEvent::FileEvaluated {
            path: path.to_path_buf(),
            decision,
        });

        if !deleted {
            return;
        }
        self.result.deleted_files += 1;
        if self.config.debug_only {
            return;
        }

        match self.remover.remove(path, self.mode) {
            Ok(Removal::Permanent { trash_error }) => self.emit(ZapEvent::SoftDeleteFellBack {
                path: path.to_path_buf(),
                reason: trash_error,
            }),
            Ok(_) => {}
            Err(e) => {
                self.result.failed_deletions += 1;
                self.emit(ZapEvent::DeleteFailed {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                });
            }
        }
    }
}

/// Split a folder's entries into subfolders and files, each sorted by path.
///
/// Symlinked directories are not followed; symlinks to files count as files.
fn list_folder(path: &Path) -> std::io::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let entry_path = entry.path();
        if file_type.is_dir() {
            subdirs.push(entry_path);
        } else if file_type.is_file() || (file_type.is_symlink() && entry_path.is_file()) {
            files.push(entry_path);
        }
    }
    subdirs.sort();
    files.sort();
    Ok((subdirs, files))
}

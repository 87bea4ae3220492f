//! File removal capability.
//!
//! The engine decides *whether* a file goes and whether the removal is
//! [`DeleteMode::Hard`] or [`DeleteMode::Soft`]; a [`FileRemover`] carries it
//! out. [`SystemRemover`] uses the platform trash via the `trash` crate for
//! soft deletes and `std::fs::remove_file` for hard ones.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not move to trash ({trash}) or delete ({io})")]
    SoftAndHardFailed { trash: String, io: std::io::Error },
}

/// How a file should be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Permanent, non-recoverable removal.
    Hard,
    /// Move to the system trash / recycle bin.
    Soft,
}

impl DeleteMode {
    pub fn from_hard_delete(hard_delete: bool) -> Self {
        if hard_delete { Self::Hard } else { Self::Soft }
    }
}

/// What a successful removal actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Trashed,
    Deleted,
    /// A soft delete was requested but the trash refused; the file was
    /// deleted permanently instead.
    Permanent { trash_error: String },
}

pub trait FileRemover {
    fn remove(&self, path: &Path, mode: DeleteMode) -> Result<Removal, RemoveError>;
}

impl<T: FileRemover + ?Sized> FileRemover for &T {
    fn remove(&self, path: &Path, mode: DeleteMode) -> Result<Removal, RemoveError> {
        (**self).remove(path, mode)
    }
}

/// Removes files from the real filesystem.
pub struct SystemRemover;

impl SystemRemover {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRemover {
    fn default() -> Self {
        Self::new()
    }
}

impl FileRemover for SystemRemover {
    fn remove(&self, path: &Path, mode: DeleteMode) -> Result<Removal, RemoveError> {
        match mode {
            DeleteMode::Hard => {
                std::fs::remove_file(path)?;
                Ok(Removal::Deleted)
            }
            DeleteMode::Soft => match trash::delete(path) {
                Ok(()) => Ok(Removal::Trashed),
                Err(e) => {
                    let trash_error = e.to_string();
                    match std::fs::remove_file(path) {
                        Ok(()) => Ok(Removal::Permanent { trash_error }),
                        Err(io) => Err(RemoveError::SoftAndHardFailed {
                            trash: trash_error,
                            io,
                        }),
                    }
                }
            },
        }
    }
}

//! # Small Image Zapper
//!
//! Deletes every image below a minimum pixel count from a folder and all of
//! its subfolders. Built for clearing thumbnails, icons and web-page debris
//! out of photo collections.
//!
//! # Pipeline
//!
//! ```text
//! root/ ──walk──▶ file ──filter──▶ Decision ──▶ counters + optional removal
//! ```
//!
//! One call to [`zapper::process`] walks one root folder, evaluates every
//! file with [`filter::evaluate`], and returns a fresh [`zapper::RunResult`].
//! The walk emits [`zapper::ZapEvent`]s but never prints; rendering lives
//! in [`output`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`zapper`] | Recursive walk, counters, timing, events |
//! | [`filter`] | Ordered per-file decision chain |
//! | [`imaging`] | Image inspector capability: format, dimensions, integrity |
//! | [`remover`] | File removal capability: trash or permanent delete |
//! | [`config`] | `ZapConfig`, TOML file loading, CLI overrides, validation |
//! | [`output`] | Plain-text rendering of settings, events and summary |
//!
//! # Design Decisions
//!
//! ## Capabilities Behind Traits
//!
//! Reading image headers and removing files are the two things the core
//! does to the outside world. Both sit behind traits ([`imaging::ImageInspector`],
//! [`remover::FileRemover`]) so tests can prove "this file was never opened"
//! or "nothing was deleted" with recording mocks.
//!
//! ## Dry Runs Count Exactly
//!
//! Debug mode runs the same pipeline and increments `deleted_files` for
//! every file a real run would remove. Only the removal call is skipped.
//!
//! ## Cheap Checks First
//!
//! Extension and size filters run before the image is opened. Header reads
//! on large files are the slow part of a run.

pub mod config;
pub mod filter;
pub mod imaging;
pub mod output;
pub mod remover;
pub mod zapper;

#[cfg(test)]
pub(crate) mod test_helpers;

//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Settings banner
//!
//! ```text
//! Root path: /photos
//! Min pixel size: 240,000
//! Max file size: unlimited
//! Skipping extensions: .gif, .zip
//! ```
//!
//! ## Events (verbose)
//!
//! ```text
//! Processing folder: /photos/2019 (13 files)
//! Skipping extension for file: /photos/2019/anim.gif
//! Small image: /photos/2019/icon.png (10,000 px)
//! Skipping corrupt image: /photos/2019/cut.jpg
//!     * missing JPEG end-of-image trailer (file may be truncated)
//! ```
//!
//! ## Summary
//!
//! ```text
//! Processed 1 folders in 12 ms. Deleted 3 files out of 13 found.
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function returns lines for testability; the `print_*`
//! wrappers write them to stdout. Format functions are pure.

use crate::config::ZapConfig;
use crate::filter::Decision;
use crate::zapper::{RunResult, ZapEvent};
use std::path::Path;

/// Group digits in threes: `240000` → `240,000`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Reasons as indented bullet lines.
fn reason_lines(reasons: &[String]) -> impl Iterator<Item = String> + '_ {
    reasons.iter().map(|r| format!("    * {r}"))
}

/// Pre-run settings banner.
pub fn format_settings(root: &Path, config: &ZapConfig) -> Vec<String> {
    let mut lines = vec![
        format!("Root path: {}", root.display()),
        format!("Min pixel size: {}", format_count(config.min_pixels)),
        match config.max_bytes {
            Some(max) => format!("Max file size: {} bytes", format_count(max)),
            None => "Max file size: unlimited".to_string(),
        },
    ];
    if !config.skip_extensions.is_empty() {
        let exts: Vec<&str> = config.skip_extensions.iter().map(String::as_str).collect();
        lines.push(format!("Skipping extensions: {}", exts.join(", ")));
    }
    if config.hard_delete {
        lines.push("Hard delete enabled. Files will not go to the trash.".to_string());
    }
    lines
}

/// Render one file decision.
fn format_decision(path: &Path, decision: &Decision) -> Vec<String> {
    let p = path.display();
    match decision {
        Decision::SkippedExtension => vec![format!("Skipping extension for file: {p}")],
        Decision::SkippedTooLarge { bytes } => {
            vec![format!("Skipping large file: {p} ({} bytes)", format_count(*bytes))]
        }
        Decision::SkippedUnsupportedFormat => vec![format!("Unsupported file: {p}")],
        Decision::SkippedCorrupt { reasons } => {
            let mut lines = vec![format!("Skipping corrupt image: {p}")];
            lines.extend(reason_lines(reasons));
            lines
        }
        Decision::SkippedNoDimensions => vec![format!("No image properties: {p}")],
        Decision::Kept { pixels } => {
            vec![format!("Keeping image: {p} ({} px)", format_count(*pixels))]
        }
        Decision::Deleted { pixels } => {
            vec![format!("Small image: {p} ({} px)", format_count(*pixels))]
        }
    }
}

/// Render one walk event.
pub fn format_event(event: &ZapEvent) -> Vec<String> {
    match event {
        ZapEvent::FolderStarted { path, file_count } => vec![format!(
            "Processing folder: {} ({} files)",
            path.display(),
            format_count(*file_count as u64)
        )],
        ZapEvent::FileEvaluated { path, decision } => format_decision(path, decision),
        ZapEvent::SoftDeleteFellBack { path, reason } => vec![format!(
            "Trash unavailable, deleted permanently: {} ({reason})",
            path.display()
        )],
        ZapEvent::DeleteFailed { path, error } => {
            vec![format!("Failed to delete {}: {error}", path.display())]
        }
        ZapEvent::FolderUnreadable { path, error } => {
            vec![format!("Cannot read folder {}: {error}", path.display())]
        }
        ZapEvent::FileUnreadable { path, error } => {
            vec![format!("Cannot read file {}: {error}", path.display())]
        }
    }
}

/// Whether an event should be shown even without `--verbose`.
pub fn is_problem(event: &ZapEvent) -> bool {
    matches!(
        event,
        ZapEvent::SoftDeleteFellBack { .. }
            | ZapEvent::DeleteFailed { .. }
            | ZapEvent::FolderUnreadable { .. }
            | ZapEvent::FileUnreadable { .. }
    )
}

/// Final one-line summary.
pub fn format_summary(result: &RunResult) -> String {
    let mut line = format!(
        "Processed {} folders in {} ms. Deleted {} files out of {} found.",
        format_count(result.total_folders),
        format_count(u64::try_from(result.elapsed.as_millis()).unwrap_or(u64::MAX)),
        format_count(result.deleted_files),
        format_count(result.total_files),
    );
    if result.failed_deletions > 0 {
        line.push_str(&format!(
            " {} deletions failed.",
            format_count(result.failed_deletions)
        ));
    }
    line
}

pub fn print_settings(root: &Path, config: &ZapConfig) {
    for line in format_settings(root, config) {
        println!("{}", line);
    }
}

pub fn print_summary(result: &RunResult) {
    println!("{}", format_summary(result));
}

//! Per-file decision pipeline.
//!
//! [`evaluate`] runs an ordered chain; the first rule that matches decides
//! and later rules are never consulted:
//!
//! ```text
//! 1. extension in skip list      → SkippedExtension        (no inspection)
//! 2. size > max_bytes            → SkippedTooLarge         (no inspection)
//! 3. inspect
//!      not an image / unsupported → SkippedUnsupportedFormat
//!      corrupt                    → SkippedCorrupt
//! 4. flagged possibly corrupt    → SkippedCorrupt
//! 5. width or height unknown     → SkippedNoDimensions
//! 6. width * height < min_pixels → Deleted, else Kept
//! ```
//!
//! Evaluation has no side effects and no cross-file state. Acting on a
//! [`Decision::Deleted`] (or not, in debug mode) is the engine's job.

use crate::config::ZapConfig;
use crate::imaging::{ImageInspector, Inspection};
use std::path::Path;

/// Outcome for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    SkippedExtension,
    SkippedTooLarge { bytes: u64 },
    SkippedUnsupportedFormat,
    SkippedCorrupt { reasons: Vec<String> },
    SkippedNoDimensions,
    Kept { pixels: u64 },
    Deleted { pixels: u64 },
}

impl Decision {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Decision::Deleted { .. })
    }
}

/// The file's extension in leading-dot form, exactly as on disk.
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension().map(|e| format!(".{}", e.to_string_lossy()))
}

/// Decide what happens to the file at `path`, whose size is `bytes`.
pub fn evaluate(
    inspector: &impl ImageInspector,
    path: &Path,
    bytes: u64,
    config: &ZapConfig,
) -> Decision {
    if dotted_extension(path).is_some_and(|ext| config.skip_extensions.contains(&ext)) {
        return Decision::SkippedExtension;
    }

    if config.exceeds_max_bytes(bytes) {
        return Decision::SkippedTooLarge { bytes };
    }

    let props = match inspector.inspect(path) {
        Inspection::NotAnImage | Inspection::UnsupportedFormat => {
            return Decision::SkippedUnsupportedFormat;
        }
        Inspection::Corrupt { reasons } => return Decision::SkippedCorrupt { reasons },
        Inspection::Readable(props) => props,
    };

    if props.possibly_corrupt {
        return Decision::SkippedCorrupt {
            reasons: props.reasons,
        };
    }

    match props.pixels() {
        None => Decision::SkippedNoDimensions,
        Some(pixels) if pixels < config.min_pixels => Decision::Deleted { pixels },
        Some(pixels) => Decision::Kept { pixels },
    }
}

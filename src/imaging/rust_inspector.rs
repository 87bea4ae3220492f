//! Pure Rust inspector built on the `image` crate ecosystem.
//!
//! Only headers are read; nothing is decoded to pixels.
//!
//! ## Crate mapping
//!
//! | Step | Crate / function |
//! |---|---|
//! | Format detection | `image::ImageReader::with_guessed_format` (magic bytes, then extension) |
//! | Dimensions (JPEG, PNG, GIF, BMP, TIFF, WebP) | `image::ImageReader::into_dimensions` |
//! | Dimensions (AVIF) | `avif-parse` container metadata |
//! | Possibly corrupt | [`integrity::check_trailer`](super::integrity::check_trailer) |

use super::inspector::{ImageInspector, ImageProperties, Inspection};
use super::integrity::check_trailer;
use image::{ImageError, ImageReader};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Header-reading inspector used by the CLI.
pub struct RustInspector;

impl RustInspector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustInspector {
    fn default() -> Self {
        Self::new()
    }
}

fn is_avif(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("avif"))
}

/// Build `Readable` properties, treating a zero extent as unknown.
fn readable(width: u32, height: u32, reasons: Vec<String>) -> Inspection {
    Inspection::Readable(ImageProperties {
        possibly_corrupt: !reasons.is_empty(),
        reasons,
        width: (width > 0).then_some(width),
        height: (height > 0).then_some(height),
    })
}

/// Read dimensions from an AVIF file's container metadata.
fn inspect_avif(path: &Path) -> Inspection {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Inspection::UnsupportedFormat,
    };
    let avif = match avif_parse::read_avif(&mut BufReader::new(file)) {
        Ok(a) => a,
        Err(e) => {
            return Inspection::Corrupt {
                reasons: vec![format!("failed to parse AVIF container: {e:?}")],
            };
        }
    };
    match avif.primary_item_metadata() {
        Ok(meta) => readable(
            meta.max_frame_width.get(),
            meta.max_frame_height.get(),
            Vec::new(),
        ),
        Err(e) => Inspection::Corrupt {
            reasons: vec![format!("failed to read AVIF metadata: {e:?}")],
        },
    }
}

/// Map a header read failure onto an inspection outcome.
fn classify_error(err: ImageError) -> Inspection {
    match err {
        ImageError::Unsupported(_) => Inspection::UnsupportedFormat,
        ImageError::Decoding(e) => Inspection::Corrupt {
            reasons: vec![e.to_string()],
        },
        ImageError::IoError(e) if e.kind() == ErrorKind::UnexpectedEof => Inspection::Corrupt {
            reasons: vec!["unexpected end of file in image header".to_string()],
        },
        _ => Inspection::UnsupportedFormat,
    }
}

impl ImageInspector for RustInspector {
    fn inspect(&self, path: &Path) -> Inspection {
        if is_avif(path) {
            return inspect_avif(path);
        }
        let reader = match ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
            Ok(r) => r,
            Err(_) => return Inspection::UnsupportedFormat,
        };
        let Some(format) = reader.format() else {
            return Inspection::NotAnImage;
        };
        match reader.into_dimensions() {
            Ok((width, height)) => readable(width, height, check_trailer(path, format)),
            Err(e) => classify_error(e),
        }
    }
}

//! Image inspector trait and the tagged result it returns.
//!
//! The [`ImageInspector`] trait answers one question per file: what kind of
//! image is this, and how big is it? Every outcome, including failures
//! inside the reader, is expressed as an [`Inspection`] variant so the
//! filter pipeline branches on an explicit classification instead of
//! catching errors.
//!
//! The production implementation is
//! [`RustInspector`](super::rust_inspector::RustInspector).

use std::path::Path;

/// What the inspector learned about a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// No recognizable image container.
    NotAnImage,
    /// Recognized (or claimed) format with no compiled-in reader, or any
    /// unexpected reader failure.
    UnsupportedFormat,
    /// The container could not be read as an image.
    Corrupt { reasons: Vec<String> },
    /// The header was read.
    Readable(ImageProperties),
}

/// Properties of an image whose header was read successfully.
///
/// `width`/`height` are `None` when the reader opened the file but could not
/// determine an extent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageProperties {
    /// Soft integrity signal, distinct from a hard read failure.
    pub possibly_corrupt: bool,
    pub reasons: Vec<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageProperties {
    /// Properties for a clean image with known dimensions.
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// `width * height`, widened so multi-gigapixel extents stay exact.
    ///
    /// `None` if either dimension is unknown.
    pub fn pixels(&self) -> Option<u64> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(u64::from(w) * u64::from(h)),
            _ => None,
        }
    }
}

/// Capability for classifying a file and reading its pixel dimensions.
///
/// Implementations must not panic on malformed input; internal failures are
/// reported as [`Inspection::UnsupportedFormat`].
pub trait ImageInspector {
    fn inspect(&self, path: &Path) -> Inspection;
}

impl<T: ImageInspector + ?Sized> ImageInspector for &T {
    fn inspect(&self, path: &Path) -> Inspection {
        (**self).inspect(path)
    }
}

//! Image inspection: header reads only, nothing is decoded to pixels.
//!
//! | Concern | Where |
//! |---|---|
//! | **Capability** | [`ImageInspector`] trait + [`Inspection`] result |
//! | **Dimensions** | `image::ImageReader::into_dimensions`, `avif-parse` for AVIF |
//! | **Possibly corrupt** | trailer checks in `integrity` |
//!
//! The split mirrors the rest of the crate: the filter pipeline only sees the
//! trait, so tests swap in a recording mock without touching real files.

pub mod inspector;
mod integrity;
pub mod rust_inspector;

pub use inspector::{ImageInspector, ImageProperties, Inspection};
pub use rust_inspector::RustInspector;

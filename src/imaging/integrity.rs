//! Trailer checks for the "possibly corrupt" signal.
//!
//! A header read proves the container opens, not that it is complete. An
//! interrupted download or copy usually leaves a valid header with the tail
//! missing, so each checked format is tested for its end marker:
//!
//! | Format | Expected tail |
//! |---|---|
//! | JPEG | `FF D9` (end of image) |
//! | PNG | `IEND` chunk + CRC |
//! | GIF | `3B` (trailer) |
//!
//! JPEG and PNG markers may appear anywhere in the examined tail: phones and
//! editors append vendor data after the end marker, and neither sequence can
//! occur inside the encoded image data. The GIF trailer is a single byte, so
//! it must be the last non-zero byte of the file. Trailing zero padding is
//! ignored; some cameras and copy tools pad files to a block boundary. Other
//! formats are not checked.

use image::ImageFormat;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// How many bytes from the end of the file are examined.
const TAIL_LEN: u64 = 512;

const JPEG_EOI: &[u8] = &[0xFF, 0xD9];
const PNG_IEND: &[u8] = &[0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82];
const GIF_TRAILER: &[u8] = &[0x3B];

/// Check the end of `path` for the format's trailer.
///
/// Returns human-readable reasons; empty means nothing suspicious.
pub fn check_trailer(path: &Path, format: ImageFormat) -> Vec<String> {
    let Some(expected) = expected_trailer(format) else {
        return Vec::new();
    };
    match read_tail(path) {
        Ok(tail) => tail_reasons(&tail, format, expected),
        Err(e) => vec![format!("could not read end of file: {e}")],
    }
}

fn expected_trailer(format: ImageFormat) -> Option<&'static [u8]> {
    match format {
        ImageFormat::Jpeg => Some(JPEG_EOI),
        ImageFormat::Png => Some(PNG_IEND),
        ImageFormat::Gif => Some(GIF_TRAILER),
        _ => None,
    }
}

fn tail_reasons(tail: &[u8], format: ImageFormat, expected: &[u8]) -> Vec<String> {
    let end = tail.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let found = match format {
        ImageFormat::Jpeg | ImageFormat::Png => {
            tail[..end].windows(expected.len()).any(|w| w == expected)
        }
        _ => tail[..end].ends_with(expected),
    };
    if found {
        Vec::new()
    } else {
        vec![format!("missing {} trailer (file may be truncated)", format_name(format))]
    }
}

fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "JPEG end-of-image",
        ImageFormat::Png => "PNG IEND",
        ImageFormat::Gif => "GIF",
        _ => "image",
    }
}

fn read_tail(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let start = len.saturating_sub(TAIL_LEN);
    file.seek(SeekFrom::Start(start))?;
    let mut tail = Vec::with_capacity((len - start) as usize);
    file.read_to_end(&mut tail)?;
    Ok(tail)
}

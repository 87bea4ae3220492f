//! Shared test utilities: synthetic image files and the reference tree.
//!
//! Fixtures are generated at test time with the `image` crate encoders, so
//! no binary files are checked in. File size is controlled through content:
//! solid-colour images compress to a few hundred bytes, seeded noise does
//! not compress at all.

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a single-colour image; the format follows the extension.
pub fn write_solid_image(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, Rgb([40, 120, 200]));
    img.save(path).unwrap();
}

/// Write an image filled with deterministic noise; the format follows the
/// extension.
pub fn write_noise_image(path: &Path, width: u32, height: u32, seed: u32) {
    let mut state = seed.wrapping_mul(2_654_435_761).max(1);
    let img = RgbImage::from_fn(width, height, |_, _| {
        let mut px = [0u8; 3];
        for channel in &mut px {
            // xorshift32
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            *channel = (state >> 24) as u8;
        }
        Rgb(px)
    });
    img.save(path).unwrap();
}

/// Create an empty file and return its path.
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"").unwrap();
    path
}

/// Build the 13-file reference tree.
///
/// All files live in a single subfolder; the root itself holds none. Every
/// file is a valid image.
///
/// | File | Size (px) | Bytes |
/// |---|---|---|
/// | `icon.png` | 100 x 100 | small |
/// | `thumb.jpg` | 150 x 150 | small |
/// | `speckle.png` | 199 x 199 | > 30,000 |
/// | `banner.gif` | 300 x 300 | small |
/// | `wide.png` | 400 x 300 | small |
/// | `square.png` | 250 x 250 | small |
/// | `flat.jpg` | 320 x 240 | small |
/// | `poster.png` | 210 x 200 | small |
/// | `noise-a.png` | 250 x 250 | > 30,000 |
/// | `noise-b.jpg` | 300 x 300 | > 30,000 |
/// | `noise-c.tif` | 300 x 300 | > 30,000 |
/// | `noise-d.png` | 220 x 300 | > 30,000 |
/// | `noise-e.png` | 400 x 200 | > 30,000 |
///
/// With a 200 x 200 threshold, 3 images are small. One file is a `.gif`.
/// Seven files are at most 30,000 bytes.
pub fn reference_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let assets = tmp.path().join("assets");
    std::fs::create_dir_all(&assets).unwrap();

    for (name, w, h) in [
        ("icon.png", 100, 100),
        ("thumb.jpg", 150, 150),
        ("banner.gif", 300, 300),
        ("wide.png", 400, 300),
        ("square.png", 250, 250),
        ("flat.jpg", 320, 240),
        ("poster.png", 210, 200),
    ] {
        write_solid_image(&assets.join(name), w, h);
    }

    for (seed, (name, w, h)) in [
        ("speckle.png", 199, 199),
        ("noise-a.png", 250, 250),
        ("noise-b.jpg", 300, 300),
        ("noise-c.tif", 300, 300),
        ("noise-d.png", 220, 300),
        ("noise-e.png", 400, 200),
    ]
    .into_iter()
    .enumerate()
    {
        write_noise_image(&assets.join(name), w, h, seed as u32 + 1);
    }

    tmp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_tree_byte_sizes() {
        let tree = reference_tree();
        let small = std::fs::read_dir(tree.path().join("assets"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.metadata().unwrap().len() <= 30_000)
            .count();
        assert_eq!(small, 7);
    }
}

#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Deterministic test pattern; different seeds give different pixels
pub fn pattern(seed: u8) -> RgbImage {
    RgbImage::from_fn(64, 48, |x, y| {
        Rgb([
            (x as u8).wrapping_mul(3).wrapping_add(seed),
            (y as u8).wrapping_mul(5),
            seed.wrapping_mul(7),
        ])
    })
}

/// Save the pattern for `seed` at `dir/name`, format chosen by extension
pub fn write_image(dir: &Path, name: &str, seed: u8) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    pattern(seed).save(&path).unwrap();
    path
}

/// Write bytes that no decoder accepts
pub fn write_garbage(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"DUMMY IMAGE DATA").unwrap();
    path
}

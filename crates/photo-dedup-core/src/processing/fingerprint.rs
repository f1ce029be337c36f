/// Functions for reducing an image to a digest of its normalized pixels
use image::{imageops, DynamicImage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::config::{Config, ResampleFilter, DEFAULT_NORMALIZED_SIZE};
use crate::error::{Error, Result};

/// BLAKE3 digest of an image's normalized RGB pixel buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentFingerprint([u8; blake3::OUT_LEN]);

impl ContentFingerprint {
    pub fn as_bytes(&self) -> &[u8; blake3::OUT_LEN] {
        &self.0
    }
}

impl From<blake3::Hash> for ContentFingerprint {
    fn from(hash: blake3::Hash) -> Self {
        Self(*hash.as_bytes())
    }
}

impl fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", blake3::Hash::from(self.0).to_hex())
    }
}

/// How a decoded image is reduced before hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalization {
    /// Edge length of the square output grid
    pub size: u32,

    /// Resampling filter for the resize
    pub filter: ResampleFilter,
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            size: DEFAULT_NORMALIZED_SIZE,
            filter: ResampleFilter::CatmullRom,
        }
    }
}

impl From<&Config> for Normalization {
    fn from(config: &Config) -> Self {
        Self {
            size: config.normalized_size,
            filter: config.resample_filter,
        }
    }
}

/// Fingerprint the image at `path` using the default normalization
pub fn fingerprint<P: AsRef<Path>>(path: P) -> Result<ContentFingerprint> {
    fingerprint_with(path, &Normalization::default())
}

/// Decode the image at `path` and fingerprint it
pub fn fingerprint_with<P: AsRef<Path>>(
    path: P,
    normalization: &Normalization,
) -> Result<ContentFingerprint> {
    let path = path.as_ref();
    let image = decode(path).map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(fingerprint_image(&image, normalization))
}

/// Decode using the format sniffed from the file contents, not the extension
fn decode(path: &Path) -> image::ImageResult<DynamicImage> {
    image::io::Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(image::ImageError::IoError)?
        .decode()
}

/// Fingerprint an already decoded image
///
/// Alpha is dropped and the image is stretched onto a square grid, so
/// resolution, aspect ratio and transparency do not affect the result.
pub fn fingerprint_image(image: &DynamicImage, normalization: &Normalization) -> ContentFingerprint {
    let rgb = image.to_rgb8();
    let normalized = imageops::resize(
        &rgb,
        normalization.size,
        normalization.size,
        normalization.filter.into(),
    );

    // Row-major, R-G-B byte order
    blake3::hash(normalized.as_raw()).into()
}

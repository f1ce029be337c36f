//! Content fingerprinting of decoded images.

mod fingerprint;

pub use fingerprint::{fingerprint, fingerprint_image, fingerprint_with, ContentFingerprint, Normalization};

//! Grouping of discovered images by content fingerprint.

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::discovery::discover_images;
use crate::error::Result;
use crate::logging::log_decode_error;
use crate::processing::{fingerprint_with, ContentFingerprint, Normalization};
use crate::types::{DuplicatePair, ImageFile};

/// First path seen for each fingerprint
///
/// Entries are never overwritten: later matches are reported as pairs
/// against the path that was registered first.
#[derive(Debug, Default, Clone)]
pub struct DuplicateRegistry {
    originals: HashMap<ContentFingerprint, PathBuf>,
}

impl DuplicateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` under `fingerprint`, or pair it with the existing original
    pub fn observe(&mut self, fingerprint: ContentFingerprint, path: PathBuf) -> Option<DuplicatePair> {
        match self.originals.entry(fingerprint) {
            Entry::Occupied(original) => Some(DuplicatePair::new(path, original.get().clone())),
            Entry::Vacant(slot) => {
                slot.insert(path);
                None
            }
        }
    }

    pub fn original(&self, fingerprint: &ContentFingerprint) -> Option<&Path> {
        self.originals.get(fingerprint).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.originals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }
}

/// Scan `root` and return every `(duplicate, original)` pair found
pub fn find_duplicates<P: AsRef<Path>>(root: P, config: &Config) -> Result<Vec<DuplicatePair>> {
    let mut registry = DuplicateRegistry::new();
    find_duplicates_with_registry(root, config, &mut registry)
}

/// Scan `root`, recording originals into a caller-owned registry
pub fn find_duplicates_with_registry<P: AsRef<Path>>(
    root: P,
    config: &Config,
    registry: &mut DuplicateRegistry,
) -> Result<Vec<DuplicatePair>> {
    let root = root.as_ref();

    info!("Discovering images in {}", root.display());
    let images = discover_images(root, config)?;
    info!("Found {} candidate images", images.len());

    let fingerprints = fingerprint_all(&images, config)?;

    // Registry insertion stays sequential and in traversal order
    let mut pairs = Vec::new();
    for (image, result) in images.iter().zip(fingerprints) {
        match result {
            Ok(fingerprint) => {
                if let Some(pair) = registry.observe(fingerprint, image.path.clone()) {
                    debug!(
                        "Duplicate: {} == {}",
                        pair.duplicate.display(),
                        pair.original.display()
                    );
                    pairs.push(pair);
                }
            }
            Err(e) => log_decode_error(&image.path, &e),
        }
    }

    info!(
        "Found {} duplicate pairs across {} distinct images",
        pairs.len(),
        registry.len()
    );
    Ok(pairs)
}

/// Fingerprint every image, returning results in input order
fn fingerprint_all(images: &[ImageFile], config: &Config) -> Result<Vec<Result<ContentFingerprint>>> {
    let normalization = Normalization::from(config);
    let progress = progress_bar(images.len() as u64, config.show_progress);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let results = pool.install(|| {
        images
            .par_iter()
            .map(|image| {
                let result = fingerprint_with(&image.path, &normalization);
                progress.inc(1);
                result
            })
            .collect::<Vec<_>>()
    });

    progress.finish_with_message("Fingerprinting complete");
    Ok(results)
}

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template("[{eta}] {bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}")
        .map(|style| style.progress_chars("##-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());

    let progress = ProgressBar::new(len);
    progress.set_style(style);
    progress.set_message("Computing fingerprints...");
    progress
}

use log::{debug, warn};
use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{ImageFile, ImageFormat};

/// Discover candidate images under `root`, in a stable traversal order
pub fn discover_images<P: AsRef<Path>>(root: P, config: &Config) -> Result<Vec<ImageFile>> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(Error::FileNotFound(root.to_path_buf()));
    }

    let max_depth = config.max_depth.unwrap_or(usize::MAX);
    let mut image_files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(max_depth)
        .sort_by(traversal_order)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let format = match get_image_format(path) {
            Some(format) if format.is_supported() => format,
            _ => continue,
        };

        match entry.metadata() {
            Ok(metadata) => image_files.push(ImageFile {
                path: path.to_path_buf(),
                size: metadata.len(),
                format,
            }),
            Err(e) => warn!("Error reading metadata for {}: {}", path.display(), e),
        }
    }

    debug!("Discovered {} images under {}", image_files.len(), root.display());
    Ok(image_files)
}

/// Orders siblings by file stem, then by full name
///
/// `photo.png` is visited before `photo - Copy.png` and `photo 1.png`,
/// which would otherwise sort first because ' ' precedes '.'.
fn traversal_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    let stem = |entry: &DirEntry| {
        Path::new(entry.file_name())
            .file_stem()
            .unwrap_or(entry.file_name())
            .to_os_string()
    };

    stem(a)
        .cmp(&stem(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Get image format from file extension
fn get_image_format(path: &Path) -> Option<ImageFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(ImageFormat::from_extension)
}

/// Returns true if the path carries a supported image extension
pub fn has_image_extension(path: &Path) -> bool {
    get_image_format(path).is_some_and(|format| format.is_supported())
}

// -- Tests --

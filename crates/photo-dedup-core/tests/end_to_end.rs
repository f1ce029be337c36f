mod common;

use common::{write_garbage, write_image};
use photo_dedup_core::{
    choose_to_delete, find_duplicates, resolve, Config, DuplicatePair, Error, PhotoDeduper,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_scan_and_resolve_three_files() {
    let dir = tempdir().unwrap();
    let original = write_image(dir.path(), "img1.png", 1);
    let copy = write_image(dir.path(), "img1 1.png", 1);
    let distinct = write_image(dir.path(), "img2.png", 2);

    let config = Config::default();
    let pairs = find_duplicates(dir.path(), &config).unwrap();
    assert_eq!(pairs, vec![DuplicatePair::new(&copy, &original)]);

    let summary = resolve(&pairs, &config);
    assert_eq!(summary.counts(), (1, 0));
    assert!(!copy.exists());
    assert!(original.exists());
    assert!(distinct.exists());
}

#[test]
fn test_copy_suffix_is_deleted() {
    let dir = tempdir().unwrap();
    let original = write_image(dir.path(), "a.jpg", 3);
    let copy = write_image(dir.path(), "a - Copy.jpg", 3);

    let config = Config::default();
    let pairs = find_duplicates(dir.path(), &config).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(
        choose_to_delete(&pairs[0].duplicate, &pairs[0].original),
        copy.as_path()
    );

    assert_eq!(resolve(&pairs, &config).counts(), (1, 0));
    assert!(!copy.exists());
    assert!(original.exists());
}

#[test]
fn test_longer_unflagged_name_is_deleted() {
    let dir = tempdir().unwrap();
    let short = write_image(dir.path(), "photo.png", 4);
    let long = write_image(dir.path(), "photo (longername).png", 4);

    let config = Config::default();
    let pairs = find_duplicates(dir.path(), &config).unwrap();
    assert_eq!(resolve(&pairs, &config).counts(), (1, 0));
    assert!(short.exists());
    assert!(!long.exists());
}

#[test]
fn test_externally_removed_target_is_skipped() {
    let dir = tempdir().unwrap();
    let original = write_image(dir.path(), "img1.png", 5);
    let copy = write_image(dir.path(), "img1 1.png", 5);

    let config = Config::default();
    let pairs = find_duplicates(dir.path(), &config).unwrap();
    fs::remove_file(&copy).unwrap();

    let summary = resolve(&pairs, &config);
    assert_eq!(summary.counts(), (0, 1));
    assert!(original.exists());
}

#[test]
fn test_scan_is_idempotent() {
    let dir = tempdir().unwrap();
    write_image(dir.path(), "beach.png", 6);
    write_image(dir.path(), "beach copy.png", 6);
    write_image(dir.path(), "trip/beach.bmp", 6);
    write_image(dir.path(), "trip/forest.png", 7);
    write_image(dir.path(), "trip/Copy of forest.png", 7);

    let config = Config::default();
    let first = find_duplicates(dir.path(), &config).unwrap();
    let second = find_duplicates(dir.path(), &config).unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn test_non_images_never_paired() {
    let dir = tempdir().unwrap();
    let original = write_image(dir.path(), "img1.png", 8);
    let as_text = dir.path().join("img1.txt");
    let as_tiff = dir.path().join("img1.tiff");
    fs::copy(&original, &as_text).unwrap();
    fs::copy(&original, &as_tiff).unwrap();

    let pairs = find_duplicates(dir.path(), &Config::default()).unwrap();
    assert!(pairs.is_empty());
}

#[test]
fn test_uppercase_extensions_are_scanned() {
    let dir = tempdir().unwrap();
    let original = write_image(dir.path(), "IMG_0001.png", 9);
    let upper = dir.path().join("IMG_0001 copy.PNG");
    fs::copy(&original, &upper).unwrap();

    let pairs = find_duplicates(dir.path(), &Config::default()).unwrap();
    assert_eq!(pairs, vec![DuplicatePair::new(&upper, &original)]);
}

#[test]
fn test_misnamed_extension_is_grouped_by_content() {
    let dir = tempdir().unwrap();
    let original = write_image(dir.path(), "a.png", 14);
    let misnamed = dir.path().join("a 1.jpg");
    fs::copy(&original, &misnamed).unwrap();

    let pairs = find_duplicates(dir.path(), &Config::default()).unwrap();
    assert_eq!(pairs, vec![DuplicatePair::new(&misnamed, &original)]);
}

#[test]
fn test_bad_files_do_not_abort_scan() {
    let dir = tempdir().unwrap();
    write_garbage(dir.path(), "aaa.jpg");
    let original = write_image(dir.path(), "img1.png", 10);
    write_garbage(dir.path(), "corrupt.gif");
    let copy = write_image(dir.path(), "img1 - Copy.png", 10);

    let pairs = find_duplicates(dir.path(), &Config::default()).unwrap();
    assert_eq!(pairs, vec![DuplicatePair::new(&copy, &original)]);
}

#[test]
fn test_missing_root_is_error() {
    let result = find_duplicates("/path/that/does/not/exist", &Config::default());
    assert!(matches!(result, Err(Error::FileNotFound(_))));
}

#[test]
fn test_deduper_plan_then_resolve() {
    let dir = tempdir().unwrap();
    let original = write_image(dir.path(), "img1.png", 11);
    let copy = write_image(dir.path(), "img1 1.png", 11);

    let deduper = PhotoDeduper::new(Config::default()).unwrap();
    let pairs = deduper.scan(dir.path()).unwrap();

    let plan = deduper.plan(&pairs);
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].delete, copy);
    assert_eq!(plan[0].keep, original);
    assert!(copy.exists());

    assert_eq!(deduper.resolve(&pairs).counts(), (1, 0));
    assert!(deduper.scan(dir.path()).unwrap().is_empty());
}

#[test]
fn test_three_copies_leave_one_survivor() {
    let dir = tempdir().unwrap();
    let names = ["pic.png", "pic 1.png", "pic - Copy.png", "pic copy.png"];
    let paths: Vec<PathBuf> = names
        .iter()
        .map(|name| write_image(dir.path(), name, 12))
        .collect();

    let config = Config::default();
    let pairs = find_duplicates(dir.path(), &config).unwrap();
    assert_eq!(pairs.len(), 3);

    let summary = resolve(&pairs, &config);
    assert_eq!(summary.counts(), (3, 0));

    let survivors: Vec<&PathBuf> = paths.iter().filter(|p| p.exists()).collect();
    assert_eq!(survivors, vec![&paths[0]]);
}

#[test]
fn test_original_named_as_copy_keeps_more_than_one() {
    // "Copy of pic" sorts first and becomes the original; once it is deleted
    // the remaining pairs point at a missing file and are skipped
    let dir = tempdir().unwrap();
    let plain = write_image(dir.path(), "pic.png", 13);
    let numbered = write_image(dir.path(), "pic 1.png", 13);
    let original = write_image(dir.path(), "Copy of pic.png", 13);

    let config = Config::default();
    let pairs = find_duplicates(dir.path(), &config).unwrap();
    assert!(pairs.iter().all(|pair| pair.original == original));

    let summary = resolve(&pairs, &config);
    assert_eq!(summary.counts(), (1, 1));
    assert!(!original.exists());
    assert!(plain.exists());
    assert!(numbered.exists());
}

#[test]
fn test_invalid_config_rejected() {
    let config = Config {
        normalized_size: 0,
        ..Default::default()
    };
    assert!(matches!(
        PhotoDeduper::new(config),
        Err(Error::Configuration(_))
    ));
}

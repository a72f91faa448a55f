use std::collections::HashSet;
use std::fs;
use std::path::Path;

use image_rater_core::corpus;
use tempfile::tempdir;

/// Create a corpus tree mixing both image classes with non-image noise.
/// Layout:
///   root/
///     real/
///       photo_1.jpg
///       photo_2.JPEG      ← upper-case extension, still an image
///       notes.txt         ← ignored
///     fake/
///       gen_1.png
///       nested/
///         gen_2.PNG       ← nested two levels deep
///     readme.md           ← ignored
fn create_corpus(root: &Path) {
    let real = root.join("real");
    let fake_nested = root.join("fake").join("nested");
    fs::create_dir_all(&real).unwrap();
    fs::create_dir_all(&fake_nested).unwrap();

    fs::write(real.join("photo_1.jpg"), b"jpg bytes").unwrap();
    fs::write(real.join("photo_2.JPEG"), b"jpeg bytes").unwrap();
    fs::write(real.join("notes.txt"), b"not an image").unwrap();
    fs::write(root.join("fake").join("gen_1.png"), b"png bytes").unwrap();
    fs::write(fake_nested.join("gen_2.PNG"), b"png bytes").unwrap();
    fs::write(root.join("readme.md"), b"docs").unwrap();
}

#[test]
fn test_lists_exactly_the_image_files() {
    let dir = tempdir().unwrap();
    create_corpus(dir.path());

    let images = corpus::list_images(dir.path()).unwrap();
    assert_eq!(images.len(), 4);

    let names: HashSet<&str> = images.iter().map(|i| i.name.as_str()).collect();
    // No duplicates: the set is as large as the list
    assert_eq!(names.len(), 4);

    let expected: HashSet<&str> =
        ["photo_1.jpg", "photo_2.JPEG", "gen_1.png", "gen_2.PNG"]
            .into_iter()
            .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_names_carry_no_directory_components() {
    let dir = tempdir().unwrap();
    create_corpus(dir.path());

    let images = corpus::list_images(dir.path()).unwrap();
    for image in &images {
        assert!(!image.name.contains('/'), "name was {}", image.name);
        assert!(!image.name.contains('\\'), "name was {}", image.name);
        assert!(image.path.is_file());
    }
}

#[test]
fn test_empty_directory_yields_empty_sequence() {
    let dir = tempdir().unwrap();
    let images = corpus::list_images(dir.path()).unwrap();
    assert!(images.is_empty());
}

#[test]
fn test_directory_with_only_non_images_yields_empty_sequence() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.csv"), b"1,2,3").unwrap();
    fs::write(dir.path().join("movie.mp4"), b"").unwrap();

    let images = corpus::list_images(dir.path()).unwrap();
    assert!(images.is_empty());
}

#[test]
fn test_nonexistent_root_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");
    assert!(corpus::list_images(&missing).is_err());
}

#[test]
fn test_seeded_order_is_reproducible() {
    let dir = tempdir().unwrap();
    for i in 0..20 {
        fs::write(dir.path().join(format!("img_{:02}.jpg", i)), b"x").unwrap();
    }

    let first = corpus::list_images_seeded(dir.path(), 42).unwrap();
    let second = corpus::list_images_seeded(dir.path(), 42).unwrap();
    assert_eq!(first, second);

    // Still a permutation of the whole corpus
    let names: HashSet<&str> = first.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names.len(), 20);
}

#[test]
fn test_unseeded_scan_is_a_permutation_of_the_corpus() {
    let dir = tempdir().unwrap();
    for i in 0..10 {
        fs::write(dir.path().join(format!("img_{}.png", i)), b"x").unwrap();
    }

    let images = corpus::list_images(dir.path()).unwrap();
    let names: HashSet<&str> = images.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(images.len(), 10);
    assert_eq!(names.len(), 10);
}

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::Error;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// One corpus image: the full path used to show it, plus the base filename
/// recorded in the rating log. Logging only the base name keeps logs from
/// different machines comparable when the corpus root moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub path: PathBuf,
    pub name: String,
}

impl ImageRef {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// Recursively list the image files under `root` in a fresh random order.
/// An empty result is not an error; the caller decides what an empty corpus
/// means. Never opens or decodes image bytes.
pub fn list_images(root: &Path) -> Result<Vec<ImageRef>, Error> {
    let mut images = collect_sorted(root)?;
    images.shuffle(&mut rand::rng());
    Ok(images)
}

/// Same scan as [`list_images`], shuffled with a seeded RNG so tests can
/// assert exact presentation orderings.
pub fn list_images_seeded(root: &Path, seed: u64) -> Result<Vec<ImageRef>, Error> {
    let mut images = collect_sorted(root)?;
    let mut rng = StdRng::seed_from_u64(seed);
    images.shuffle(&mut rng);
    Ok(images)
}

/// Candidates in lexicographic full-path order, so the shuffle always sees
/// the same input regardless of platform directory-iteration order.
fn collect_sorted(root: &Path) -> Result<Vec<ImageRef>, Error> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if has_image_extension(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    paths.sort();
    debug!("{} image files found under {}", paths.len(), root.display());

    Ok(paths.into_iter().map(ImageRef::new).collect())
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_allowlist() {
        assert!(has_image_extension(Path::new("a/b/photo.jpg")));
        assert!(has_image_extension(Path::new("photo.JPEG")));
        assert!(has_image_extension(Path::new("photo.Png")));
        assert!(!has_image_extension(Path::new("photo.gif")));
        assert!(!has_image_extension(Path::new("notes.txt")));
        assert!(!has_image_extension(Path::new("no_extension")));
    }

    #[test]
    fn test_image_ref_name_is_base_filename() {
        let image = ImageRef::new(PathBuf::from("images/fake/nested/gen_1.png"));
        assert_eq!(image.name, "gen_1.png");
    }
}

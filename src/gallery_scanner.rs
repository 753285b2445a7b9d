// SPDX-License-Identifier: MPL-2.0
//! Gallery scanner module for discovering and ordering gallery images.
//!
//! Scans a directory for supported image formats, filters out everything
//! else, and sorts the result by file name. The runtime only ever sees the
//! ordered list produced here; the lightbox and the gallery rows are built
//! on top of it.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// File extensions accepted as gallery images (matched case-insensitively).
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp"];

/// An ordered list of gallery images found in a directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryList {
    images: Vec<PathBuf>,
}

impl GalleryList {
    /// Creates a new empty GalleryList.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Scans `directory` for supported images, sorted by file name.
    ///
    /// Returns an error if the directory cannot be read. A directory without
    /// any images yields an empty list, not an error.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let mut images = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                images.push(path);
            }
        }

        images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(Self { images })
    }

    /// Returns the ordered image paths.
    pub fn items(&self) -> &[PathBuf] {
        &self.images
    }

    /// Returns the total number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Splits the list into up to `row_count` contiguous rows of roughly
    /// equal size. Trailing empty rows are dropped, so a short list produces
    /// fewer rows rather than blank strips.
    pub fn rows(&self, row_count: usize) -> Vec<Vec<PathBuf>> {
        if self.images.is_empty() || row_count == 0 {
            return Vec::new();
        }

        let chunk = self.images.len().div_ceil(row_count);
        self.images
            .chunks(chunk)
            .take(row_count)
            .map(<[PathBuf]>::to_vec)
            .collect()
    }
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_only_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.png");
        create_test_image(temp_dir.path(), "c.webp");
        create_test_image(temp_dir.path(), "notes.txt");
        create_test_image(temp_dir.path(), "clip.mp4");

        let list = GalleryList::scan_directory(temp_dir.path()).expect("scan failed");

        assert_eq!(list.len(), 3);
    }

    #[test]
    fn scan_directory_sorts_by_file_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_image(temp_dir.path(), "c.jpg");
        let img_a = create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");

        let list = GalleryList::scan_directory(temp_dir.path()).expect("scan failed");

        assert_eq!(list.items(), &[img_a, img_b, img_c]);
    }

    #[test]
    fn scan_directory_accepts_uppercase_extensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "shot.JPG");
        create_test_image(temp_dir.path(), "other.PnG");

        let list = GalleryList::scan_directory(temp_dir.path()).expect("scan failed");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn scan_directory_handles_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let list = GalleryList::scan_directory(temp_dir.path()).expect("scan failed");
        assert!(list.is_empty());
        assert!(list.rows(3).is_empty());
    }

    #[test]
    fn scan_directory_errors_on_missing_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope");

        assert!(GalleryList::scan_directory(&missing).is_err());
    }

    #[test]
    fn rows_split_evenly_and_preserve_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg", "f.jpg", "g.jpg"] {
            create_test_image(temp_dir.path(), name);
        }

        let list = GalleryList::scan_directory(temp_dir.path()).expect("scan failed");
        let rows = list.rows(3);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 3);
        assert_eq!(rows[2].len(), 1);

        let flattened: Vec<_> = rows.into_iter().flatten().collect();
        assert_eq!(flattened, list.items());
    }

    #[test]
    fn rows_drop_trailing_empty_strips() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.jpg");

        let list = GalleryList::scan_directory(temp_dir.path()).expect("scan failed");
        let rows = list.rows(3);

        // ceil(2 / 3) = 1 per row; only two rows materialize.
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn is_supported_image_rejects_non_image_files() {
        assert!(!is_supported_image(Path::new("test.txt")));
        assert!(!is_supported_image(Path::new("test.mp4")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn is_supported_image_recognizes_image_extensions() {
        assert!(is_supported_image(Path::new("test.jpg")));
        assert!(is_supported_image(Path::new("test.jpeg")));
        assert!(is_supported_image(Path::new("test.png")));
        assert!(is_supported_image(Path::new("test.webp")));
        assert!(is_supported_image(Path::new("test.gif")));
    }
}

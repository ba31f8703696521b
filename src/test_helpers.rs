//! Shared test utilities.
//!
//! Fixture builders create image trees in a temp directory (files are empty;
//! only names matter to the scanner). Lookup helpers panic with the list of
//! available entries on a miss, so a failing test says what was there.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! make_album(tmp.path(), "1-John & Emmie|情侶", &["cover.jpg", "photo-1.jpg"]);
//! let report = scan(tmp.path(), &CatalogConfig::default()).unwrap();
//! assert_eq!(album_ids(&report.catalog), vec![1]);
//! ```

use std::path::{Path, PathBuf};

use crate::catalog::{AlbumRecord, Catalog};
use crate::scan::{ScanReport, SkippedFolder};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create an empty file, and its parent directories.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"").unwrap();
}

/// Create an album folder under `root` containing empty `files`.
pub fn make_album(root: &Path, folder: &str, files: &[&str]) -> PathBuf {
    let dir = root.join(folder);
    std::fs::create_dir_all(&dir).unwrap();
    for file in files {
        touch(&dir.join(file));
    }
    dir
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find an album by id. Panics if not found.
pub fn find_album(catalog: &Catalog, id: u32) -> &AlbumRecord {
    catalog.album(id).unwrap_or_else(|| {
        let ids = album_ids(catalog);
        panic!("album {id} not found. Available: {ids:?}")
    })
}

/// Find a skipped folder by name. Panics if not found.
pub fn find_skipped<'a>(report: &'a ScanReport, folder: &str) -> &'a SkippedFolder {
    report
        .skipped
        .iter()
        .find(|s| s.folder == folder)
        .unwrap_or_else(|| {
            let names: Vec<&str> = report.skipped.iter().map(|s| s.folder.as_str()).collect();
            panic!("skipped folder '{folder}' not found. Available: {names:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All album ids in catalog order.
pub fn album_ids(catalog: &Catalog) -> Vec<u32> {
    catalog.albums.iter().map(|a| a.id).collect()
}

/// File names of an album's photos, in order.
pub fn image_names(album: &AlbumRecord) -> Vec<&str> {
    album
        .images
        .iter()
        .map(|p| p.rsplit('/').next().unwrap_or(p))
        .collect()
}

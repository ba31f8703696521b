//! Special collections: flat folders of photos with no album metadata.
//!
//! `street/` and `landscape/` sit next to the album folders. They have no
//! cover and no naming convention; every image in them is listed, sorted by
//! file name. Either folder may be absent.

use crate::catalog::SpecialKind;
use crate::classify::{catalog_path, is_image_name};
use crate::scan::{ScanError, list_entries};
use std::path::Path;

/// Read one special collection as sorted catalog paths.
///
/// A missing folder yields an empty list. `path_prefix` is the catalog path
/// of `images_dir` (e.g. `public/images`). Entries that can't be read and
/// names that are not valid UTF-8 are left out.
pub fn read_special_collection(
    images_dir: &Path,
    kind: SpecialKind,
    path_prefix: &str,
) -> Result<Vec<String>, ScanError> {
    let folder = images_dir.join(kind.folder_name());
    if !folder.is_dir() {
        return Ok(Vec::new());
    }

    let rel_dir = catalog_path(path_prefix, kind.folder_name());
    let mut photos: Vec<String> = list_entries(&folder)?
        .entries
        .iter()
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str())
        .filter(|name| is_image_name(name))
        .map(|name| catalog_path(&rel_dir, name))
        .collect();

    photos.sort();
    Ok(photos)
}

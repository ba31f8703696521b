//! Per-album file classification and photo sequencing.
//!
//! Every file in an album folder lands in exactly one bucket:
//!
//! - **Cover**: `cover.jpg`, `cover.png` or `cover.webp` (any case)
//! - **Photo**: an image whose stem ends in digits (`photo-3.jpg`, `07.png`)
//! - **Skipped**: anything else, with the reason recorded
//!
//! Photos are ordered by their trailing number, numerically: `photo-2` comes
//! before `photo-10`. Files are visited in sorted name order so that equal
//! numbers (`a-1.jpg`, `b-1.jpg`) keep a stable, reproducible order.
//!
//! The [`FileTrace`] list is the raw material for the troubleshooting report
//! printed when a folder is rejected. It has one entry per file. Entries the
//! scanner could not read, or whose names are not UTF-8, never reach
//! [`classify_album_files`]; the scanner adds them to the same trace.

use crate::naming;
use std::path::Path;

/// Extensions accepted as raster images (compared lower-cased).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Cover file names in precedence order. When several are present the
/// earliest in this list wins.
pub const COVER_FILENAMES: &[&str] = &["cover.jpg", "cover.png", "cover.webp"];

/// How a single file was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Chosen as the album cover.
    Cover,
    /// A cover-named file that lost to a higher-precedence cover.
    ExtraCover { chosen: String },
    /// A sequenced photo with its trailing number.
    Photo(u64),
    /// Extension is not an accepted image type.
    NotAnImage,
    /// An image whose stem has no trailing digits, so it can't be ordered.
    NoTrailingDigits,
    /// The name is not valid UTF-8, so no catalog path can be written for it.
    NonUtf8Name,
    /// The entry could not be read, e.g. a symlink to a missing file.
    Unreadable(String),
}

/// One line of the classification trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTrace {
    pub filename: String,
    pub outcome: FileOutcome,
}

/// A photo with its parsed sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedPhoto {
    pub number: u64,
    pub path: String,
}

/// Classification result for one album folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumFiles {
    /// Catalog path of the cover, if one was found.
    pub cover: Option<String>,
    /// Catalog paths of sequenced photos, ascending by number.
    pub photos: Vec<String>,
    pub trace: Vec<FileTrace>,
}

/// Whether a file name has one of the accepted image extensions.
pub fn is_image_name(filename: &str) -> bool {
    extension_lower(filename)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn extension_lower(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}

fn cover_rank(filename: &str) -> Option<usize> {
    let lower = filename.to_lowercase();
    COVER_FILENAMES.iter().position(|c| *c == lower)
}

/// Join a catalog directory path and a file name with `/`.
pub fn catalog_path(rel_dir: &str, filename: &str) -> String {
    format!("{}/{}", rel_dir.trim_end_matches('/'), filename)
}

/// Classify the files of one album folder.
///
/// `rel_dir` is the folder's catalog path (e.g. `public/images/1-Title|情侶`);
/// output paths are `rel_dir/filename`. `filenames` may be in any order.
pub fn classify_album_files<S: AsRef<str>>(rel_dir: &str, filenames: &[S]) -> AlbumFiles {
    let mut sorted: Vec<&str> = filenames.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    let chosen_cover = sorted
        .iter()
        .filter_map(|name| cover_rank(name).map(|rank| (rank, *name)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, name)| name);

    let mut photos: Vec<SequencedPhoto> = Vec::new();
    let mut trace = Vec::with_capacity(sorted.len());

    for name in sorted {
        let outcome = if !is_image_name(name) {
            FileOutcome::NotAnImage
        } else if cover_rank(name).is_some() {
            match chosen_cover {
                Some(chosen) if chosen == name => FileOutcome::Cover,
                Some(chosen) => FileOutcome::ExtraCover {
                    chosen: chosen.to_string(),
                },
                None => FileOutcome::Cover,
            }
        } else {
            let stem = Path::new(name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            match naming::trailing_number(stem) {
                Some(number) => {
                    photos.push(SequencedPhoto {
                        number,
                        path: catalog_path(rel_dir, name),
                    });
                    FileOutcome::Photo(number)
                }
                None => FileOutcome::NoTrailingDigits,
            }
        };
        trace.push(FileTrace {
            filename: name.to_string(),
            outcome,
        });
    }

    // Stable: equal numbers keep sorted-name order
    photos.sort_by_key(|p| p.number);

    AlbumFiles {
        cover: chosen_cover.map(|name| catalog_path(rel_dir, name)),
        photos: photos.into_iter().map(|p| p.path).collect(),
        trace,
    }
}

//! Directory scanning and catalog assembly.
//!
//! Walks the images directory one level deep and turns it into a [`Catalog`].
//!
//! ## Directory Structure
//!
//! ```text
//! public/images/                             # Images root
//! ├── street/                                # Special collection (flat)
//! │   ├── a.jpg
//! │   └── b.jpg
//! ├── landscape/                             # Special collection (flat)
//! ├── 1-John & Emmie|情侶/                   # Album: id, title, categories
//! │   ├── cover.jpg                          # Album cover (required)
//! │   ├── photo-1.jpg                        # Ordered by trailing number
//! │   ├── photo-2.jpg
//! │   └── photo-10.jpg
//! └── album2-Johnny & Crystal|螢橋國中|情侶/  # Album with description
//!     ├── cover.png
//!     └── 01.jpg
//! ```
//!
//! ## Acceptance
//!
//! Stray folders are expected. A folder is skipped, not fatal, when:
//! - its name does not parse (see [`naming`](crate::naming)); hidden
//!   folders such as `.thumbs` are reported this way too
//! - its name is not valid UTF-8
//! - it has no cover image
//! - it has no photo with a trailing number
//!
//! Each skip keeps the full per-file trace so the report can explain it.
//! A file that can't be read (a dangling symlink) or whose name is not UTF-8
//! goes into the trace and is left out of the album; it never aborts the run.
//!
//! The run fails only when the images directory is missing, when it holds
//! neither album folders nor special photos, or when every album folder was
//! skipped.

use crate::catalog::{self, AlbumRecord, Catalog, SpecialFolders, SpecialKind};
use crate::classify::{self, FileOutcome, FileTrace};
use crate::config::CatalogConfig;
use crate::naming;
use crate::special;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Images directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error("No album folders or special folders found in {0}")]
    NothingFound(PathBuf),
    #[error("No valid albums ({} folders skipped)", .skipped.len())]
    NoValidAlbums { skipped: Vec<SkippedFolder> },
}

/// Why an album folder was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Name doesn't fit `N-title|categories` or `N-title|description|categories`.
    BadFolderName,
    /// Name is not valid UTF-8, so it can't be parsed or written as a path.
    NonUtf8Name,
    /// Name parsed, but no `cover.jpg`/`cover.png`/`cover.webp` was found.
    MissingCover { id: u32 },
    /// Name parsed and a cover exists, but no file has a trailing number.
    NoPhotos { id: u32 },
}

/// A folder left out of the catalog, with the evidence for why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFolder {
    pub folder: String,
    pub reason: SkipReason,
    /// Per-file classification. Empty when the folder name was rejected.
    pub trace: Vec<FileTrace>,
}

/// Result of a successful scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub catalog: Catalog,
    /// Folders skipped along the way, in folder-name order.
    pub skipped: Vec<SkippedFolder>,
    /// Per-file traces of accepted albums, keyed by album id. Only entries
    /// worth reporting (skipped files, extra covers) are kept.
    pub notes: Vec<(u32, Vec<FileTrace>)>,
}

/// Direct children of a directory, sorted by file name.
#[derive(Debug)]
pub(crate) struct Listing {
    pub entries: Vec<DirEntry>,
    /// Children that could not be read, such as symlinks to missing files.
    pub failed: Vec<FileTrace>,
}

/// List the direct children of `dir`.
///
/// Only a failure to read `dir` itself is an error. A child that can't be
/// read lands in [`Listing::failed`].
pub(crate) fn list_entries(dir: &Path) -> Result<Listing, ScanError> {
    let mut listing = Listing {
        entries: Vec::new(),
        failed: Vec::new(),
    };
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for result in walker {
        match result {
            Ok(entry) => listing.entries.push(entry),
            Err(err) if err.depth() > 0 => {
                let filename = err
                    .path()
                    .and_then(Path::file_name)
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let reason = err
                    .io_error()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                listing.failed.push(FileTrace {
                    filename,
                    outcome: FileOutcome::Unreadable(reason),
                });
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(listing)
}

/// Scan `images_dir` and assemble the catalog.
pub fn scan(images_dir: &Path, config: &CatalogConfig) -> Result<ScanReport, ScanError> {
    if !images_dir.is_dir() {
        return Err(ScanError::MissingRoot(images_dir.to_path_buf()));
    }

    let special_folders = SpecialFolders {
        street: special::read_special_collection(
            images_dir,
            SpecialKind::Street,
            &config.path_prefix,
        )?,
        landscape: special::read_special_collection(
            images_dir,
            SpecialKind::Landscape,
            &config.path_prefix,
        )?,
    };

    // Unreadable children of the root are not folders, so they are ignored
    // like loose files
    let listing = list_entries(images_dir)?;
    let album_dirs: Vec<&DirEntry> = listing
        .entries
        .iter()
        .filter(|e| e.file_type().is_dir())
        .filter(|e| {
            e.file_name()
                .to_str()
                .and_then(SpecialKind::from_folder_name)
                .is_none()
        })
        .collect();

    if album_dirs.is_empty()
        && special_folders.street.is_empty()
        && special_folders.landscape.is_empty()
    {
        return Err(ScanError::NothingFound(images_dir.to_path_buf()));
    }

    let mut albums = Vec::new();
    let mut skipped = Vec::new();
    let mut notes = Vec::new();

    for dir in album_dirs {
        let Some(folder) = dir.file_name().to_str() else {
            skipped.push(SkippedFolder {
                folder: dir.file_name().to_string_lossy().into_owned(),
                reason: SkipReason::NonUtf8Name,
                trace: Vec::new(),
            });
            continue;
        };
        match build_album(dir.path(), folder, config)? {
            Ok((album, trace)) => {
                let noteworthy = noteworthy_entries(trace);
                if !noteworthy.is_empty() {
                    notes.push((album.id, noteworthy));
                }
                albums.push(album);
            }
            Err(skip) => skipped.push(skip),
        }
    }

    if albums.is_empty() {
        return Err(ScanError::NoValidAlbums { skipped });
    }

    // Stable: equal ids keep folder-name order
    albums.sort_by(|a, b| b.id.cmp(&a.id));

    let categories = derive_categories(&albums, &config.category_order);

    Ok(ScanReport {
        catalog: Catalog {
            categories,
            special_folders,
            albums,
        },
        skipped,
        notes,
    })
}

/// Build one album record, or explain why the folder was skipped.
///
/// The outer `Result` carries I/O failures; the inner one is the normal
/// accept/skip branch.
fn build_album(
    path: &Path,
    folder: &str,
    config: &CatalogConfig,
) -> Result<Result<(AlbumRecord, Vec<FileTrace>), SkippedFolder>, ScanError> {
    let Some(meta) = naming::parse_album_folder_name(folder, &config.folder_prefix) else {
        return Ok(Err(SkippedFolder {
            folder: folder.to_string(),
            reason: SkipReason::BadFolderName,
            trace: Vec::new(),
        }));
    };

    let listing = list_entries(path)?;
    let mut unusable = listing.failed;
    let mut filenames: Vec<&str> = Vec::new();
    for entry in listing.entries.iter().filter(|e| !e.file_type().is_dir()) {
        match entry.file_name().to_str() {
            Some(name) => filenames.push(name),
            None => unusable.push(FileTrace {
                filename: entry.file_name().to_string_lossy().into_owned(),
                outcome: FileOutcome::NonUtf8Name,
            }),
        }
    }

    let rel_dir = classify::catalog_path(&config.path_prefix, folder);
    let mut files = classify::classify_album_files(&rel_dir, &filenames);
    if !unusable.is_empty() {
        files.trace.extend(unusable);
        files.trace.sort_by(|a, b| a.filename.cmp(&b.filename));
    }

    let Some(cover) = files.cover else {
        return Ok(Err(SkippedFolder {
            folder: folder.to_string(),
            reason: SkipReason::MissingCover { id: meta.id },
            trace: files.trace,
        }));
    };

    if files.photos.is_empty() {
        return Ok(Err(SkippedFolder {
            folder: folder.to_string(),
            reason: SkipReason::NoPhotos { id: meta.id },
            trace: files.trace,
        }));
    }

    Ok(Ok((
        AlbumRecord {
            id: meta.id,
            title: meta.title,
            description: meta.description,
            categories: meta.categories,
            cover,
            images: files.photos,
        },
        files.trace,
    )))
}

fn noteworthy_entries(trace: Vec<FileTrace>) -> Vec<FileTrace> {
    trace
        .into_iter()
        .filter(|t| !matches!(t.outcome, FileOutcome::Cover | FileOutcome::Photo(_)))
        .collect()
}

/// Derive the category filter list from album categories.
///
/// Reserved labels are dropped and duplicates removed. Categories named in
/// `preferred` come first in that order; the rest follow sorted by code point.
pub fn derive_categories(albums: &[AlbumRecord], preferred: &[String]) -> Vec<String> {
    let unique: BTreeSet<&str> = albums
        .iter()
        .flat_map(|a| a.categories.iter())
        .map(String::as_str)
        .filter(|c| !catalog::is_reserved_label(c))
        .collect();

    let rank = |c: &str| {
        preferred
            .iter()
            .position(|p| p == c)
            .unwrap_or(preferred.len())
    };

    let mut categories: Vec<&str> = unique.into_iter().collect();
    categories.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));
    categories.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn scan_default(root: &Path) -> Result<ScanReport, ScanError> {
        scan(root, &CatalogConfig::default())
    }

    fn record(id: u32, categories: &[&str]) -> AlbumRecord {
        AlbumRecord {
            id,
            title: String::new(),
            description: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            cover: String::new(),
            images: vec![],
        }
    }

    fn default_order() -> Vec<String> {
        CatalogConfig::default().category_order
    }

    // =========================================================================
    // Fatal conditions
    // =========================================================================

    #[test]
    fn missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let result = scan_default(&tmp.path().join("public/images"));
        assert!(matches!(result, Err(ScanError::MissingRoot(_))));
    }

    #[test]
    fn empty_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let result = scan_default(tmp.path());
        assert!(matches!(result, Err(ScanError::NothingFound(_))));
    }

    #[test]
    fn empty_special_folders_count_as_nothing() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("street")).unwrap();
        std::fs::create_dir_all(tmp.path().join("landscape")).unwrap();
        let result = scan_default(tmp.path());
        assert!(matches!(result, Err(ScanError::NothingFound(_))));
    }

    #[test]
    fn only_invalid_albums_is_fatal() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "not-an-album", &["1.jpg"]);
        make_album(tmp.path(), "2-No Cover|情侶", &["photo-1.jpg"]);

        match scan_default(tmp.path()) {
            Err(ScanError::NoValidAlbums { skipped }) => {
                assert_eq!(skipped.len(), 2);
            }
            other => panic!("expected NoValidAlbums, got {other:?}"),
        }
    }

    #[test]
    fn special_photos_without_albums_is_still_fatal() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("street").join("a.jpg"));
        let result = scan_default(tmp.path());
        assert!(matches!(result, Err(ScanError::NoValidAlbums { .. })));
    }

    // =========================================================================
    // Album acceptance
    // =========================================================================

    #[test]
    fn valid_album_becomes_record() {
        let tmp = TempDir::new().unwrap();
        make_album(
            tmp.path(),
            "3-Jon & Pei|火車站|情侶,風景",
            &["cover.jpg", "photo-2.jpg", "photo-1.jpg"],
        );

        let report = scan_default(tmp.path()).unwrap();
        let album = find_album(&report.catalog, 3);
        assert_eq!(album.title, "Jon & Pei");
        assert_eq!(album.description, "火車站");
        assert_eq!(album.categories, vec!["情侶", "風景"]);
        assert_eq!(album.cover, "public/images/3-Jon & Pei|火車站|情侶,風景/cover.jpg");
        assert_eq!(
            album.images,
            vec![
                "public/images/3-Jon & Pei|火車站|情侶,風景/photo-1.jpg",
                "public/images/3-Jon & Pei|火車站|情侶,風景/photo-2.jpg",
            ]
        );
    }

    #[test]
    fn photos_in_numeric_order() {
        let tmp = TempDir::new().unwrap();
        make_album(
            tmp.path(),
            "1-Order|a",
            &["cover.jpg", "p-3.jpg", "p-1.jpg", "p-10.jpg", "p-2.jpg"],
        );

        let report = scan_default(tmp.path()).unwrap();
        assert_eq!(
            image_names(find_album(&report.catalog, 1)),
            vec!["p-1.jpg", "p-2.jpg", "p-3.jpg", "p-10.jpg"]
        );
    }

    #[test]
    fn cover_without_photos_is_skipped() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);
        make_album(tmp.path(), "2-Empty|a", &["cover.jpg", "photo.jpg", "notes.txt"]);

        let report = scan_default(tmp.path()).unwrap();
        assert_eq!(album_ids(&report.catalog), vec![1]);

        let skip = find_skipped(&report, "2-Empty|a");
        assert_eq!(skip.reason, SkipReason::NoPhotos { id: 2 });
        let outcomes: Vec<&FileOutcome> = skip.trace.iter().map(|t| &t.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                &FileOutcome::Cover,
                &FileOutcome::NotAnImage,
                &FileOutcome::NoTrailingDigits
            ]
        );
    }

    #[test]
    fn photos_without_cover_is_skipped() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);
        make_album(tmp.path(), "2-No Cover|a", &["1.jpg", "2.jpg"]);

        let report = scan_default(tmp.path()).unwrap();
        let skip = find_skipped(&report, "2-No Cover|a");
        assert_eq!(skip.reason, SkipReason::MissingCover { id: 2 });
        assert_eq!(skip.trace.len(), 2);
    }

    #[test]
    fn bad_folder_names_skipped() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);
        make_album(tmp.path(), "drafts", &["cover.jpg", "1.jpg"]);
        make_album(tmp.path(), "5-No Pipe", &["cover.jpg", "1.jpg"]);

        let report = scan_default(tmp.path()).unwrap();
        assert_eq!(album_ids(&report.catalog), vec![1]);
        assert_eq!(
            find_skipped(&report, "drafts").reason,
            SkipReason::BadFolderName
        );
        assert_eq!(
            find_skipped(&report, "5-No Pipe").reason,
            SkipReason::BadFolderName
        );
    }

    #[test]
    fn special_dirs_not_treated_as_albums() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);
        make_album(tmp.path(), "street", &["a.jpg"]);
        make_album(tmp.path(), "landscape", &["b.jpg"]);

        let report = scan_default(tmp.path()).unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(report.catalog.albums.len(), 1);
    }

    #[test]
    fn hidden_dirs_reported_as_bad_names() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);
        make_album(tmp.path(), ".git", &["HEAD"]);

        let report = scan_default(tmp.path()).unwrap();
        assert_eq!(album_ids(&report.catalog), vec![1]);
        assert_eq!(find_skipped(&report, ".git").reason, SkipReason::BadFolderName);
    }

    #[test]
    fn only_hidden_dirs_is_no_valid_albums() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), ".thumbs", &["1.jpg"]);

        match scan_default(tmp.path()) {
            Err(ScanError::NoValidAlbums { skipped }) => {
                assert_eq!(skipped.len(), 1);
                assert_eq!(skipped[0].folder, ".thumbs");
            }
            other => panic!("expected NoValidAlbums, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_in_album_is_traced_not_fatal() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);
        let other = make_album(tmp.path(), "2-Other|a", &["cover.jpg", "1.jpg"]);
        std::os::unix::fs::symlink(tmp.path().join("missing.jpg"), other.join("3.jpg")).unwrap();

        let report = scan_default(tmp.path()).unwrap();
        assert_eq!(album_ids(&report.catalog), vec![2, 1]);
        assert_eq!(
            image_names(find_album(&report.catalog, 2)),
            vec!["1.jpg"]
        );

        let (_, notes) = report.notes.iter().find(|(id, _)| *id == 2).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].filename, "3.jpg");
        assert!(matches!(notes[0].outcome, FileOutcome::Unreadable(_)));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_against_skipped_album() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);
        let broken = make_album(tmp.path(), "2-Broken|a", &["cover.jpg"]);
        std::os::unix::fs::symlink(tmp.path().join("gone.jpg"), broken.join("1.jpg")).unwrap();

        let report = scan_default(tmp.path()).unwrap();
        let skip = find_skipped(&report, "2-Broken|a");
        assert_eq!(skip.reason, SkipReason::NoPhotos { id: 2 });
        let names: Vec<&str> = skip.trace.iter().map(|t| t.filename.as_str()).collect();
        assert_eq!(names, vec!["1.jpg", "cover.jpg"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_skipped_not_written() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let album = make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);
        touch(&album.join(OsStr::from_bytes(b"2\xff.jpg")));
        std::fs::create_dir(tmp.path().join(OsStr::from_bytes(b"3-Bad\xff|a"))).unwrap();

        let report = scan_default(tmp.path()).unwrap();
        let good = find_album(&report.catalog, 1);
        assert_eq!(image_names(good), vec!["1.jpg"]);

        let (_, notes) = &report.notes[0];
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].outcome, FileOutcome::NonUtf8Name);

        let skip = find_skipped(&report, "3-Bad\u{FFFD}|a");
        assert_eq!(skip.reason, SkipReason::NonUtf8Name);
    }

    #[test]
    fn loose_files_in_root_ignored() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);
        touch(&tmp.path().join("stray.jpg"));
        touch(&tmp.path().join("3-File|a"));

        let report = scan_default(tmp.path()).unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(album_ids(&report.catalog), vec![1]);
    }

    #[test]
    fn prefixed_folder_names_accepted() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "album4-Jonathan & Jennie|溫暖時刻|情侶", &["cover.webp", "01.jpg"]);

        let report = scan_default(tmp.path()).unwrap();
        let album = find_album(&report.catalog, 4);
        assert_eq!(album.title, "Jonathan & Jennie");
        assert!(album.cover.ends_with("/cover.webp"));
    }

    #[test]
    fn albums_sorted_by_id_descending() {
        let tmp = TempDir::new().unwrap();
        for name in ["1-One|a", "5-Five|a", "2-Two|a"] {
            make_album(tmp.path(), name, &["cover.jpg", "1.jpg"]);
        }

        let report = scan_default(tmp.path()).unwrap();
        assert_eq!(album_ids(&report.catalog), vec![5, 2, 1]);
    }

    #[test]
    fn subdirectories_inside_albums_ignored() {
        let tmp = TempDir::new().unwrap();
        let album = make_album(tmp.path(), "1-Nested|a", &["cover.jpg", "1.jpg"]);
        std::fs::create_dir_all(album.join("extra-2.jpg")).unwrap();

        let report = scan_default(tmp.path()).unwrap();
        assert_eq!(find_album(&report.catalog, 1).images.len(), 1);
    }

    #[test]
    fn notes_keep_only_noteworthy_entries() {
        let tmp = TempDir::new().unwrap();
        make_album(
            tmp.path(),
            "1-Notes|a",
            &["cover.jpg", "cover.png", "1.jpg", "readme.txt"],
        );
        make_album(tmp.path(), "2-Clean|a", &["cover.jpg", "1.jpg"]);

        let report = scan_default(tmp.path()).unwrap();
        assert_eq!(report.notes.len(), 1);
        let (id, entries) = &report.notes[0];
        assert_eq!(*id, 1);
        let names: Vec<&str> = entries.iter().map(|t| t.filename.as_str()).collect();
        assert_eq!(names, vec!["cover.png", "readme.txt"]);
    }

    #[test]
    fn custom_prefix_and_path_prefix() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "set9-Custom|a", &["cover.jpg", "1.jpg"]);

        let config = CatalogConfig {
            folder_prefix: "set".to_string(),
            path_prefix: "img".to_string(),
            ..CatalogConfig::default()
        };
        let report = scan(tmp.path(), &config).unwrap();
        let album = find_album(&report.catalog, 9);
        assert_eq!(album.cover, "img/set9-Custom|a/cover.jpg");
    }

    // =========================================================================
    // Special collections
    // =========================================================================

    #[test]
    fn absent_special_folders_are_empty() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);

        let report = scan_default(tmp.path()).unwrap();
        assert!(report.catalog.special(SpecialKind::Street).is_empty());
        assert!(report.catalog.special(SpecialKind::Landscape).is_empty());
    }

    #[test]
    fn special_folders_collected() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-Good|a", &["cover.jpg", "1.jpg"]);
        touch(&tmp.path().join("street").join("b.jpg"));
        touch(&tmp.path().join("street").join("a.jpg"));
        touch(&tmp.path().join("landscape").join("x.png"));

        let report = scan_default(tmp.path()).unwrap();
        assert_eq!(
            report.catalog.special_folders.street,
            vec!["public/images/street/a.jpg", "public/images/street/b.jpg"]
        );
        assert_eq!(
            report.catalog.special_folders.landscape,
            vec!["public/images/landscape/x.png"]
        );
    }

    // =========================================================================
    // Categories
    // =========================================================================

    #[test]
    fn categories_follow_preferred_order_then_alphabetical() {
        let albums = vec![
            record(1, &["活動", "人像"]),
            record(2, &["其他X"]),
            record(3, &["情侶"]),
        ];
        let preferred: Vec<String> = ["人像", "情侶", "登記", "婚宴", "活動"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            derive_categories(&albums, &preferred),
            vec!["人像", "情侶", "活動", "其他X"]
        );
    }

    #[test]
    fn unlisted_categories_sorted_after_listed() {
        let albums = vec![record(1, &["zoo", "婚宴", "apple", "Beta"])];
        assert_eq!(
            derive_categories(&albums, &default_order()),
            vec!["婚宴", "Beta", "apple", "zoo"]
        );
    }

    #[test]
    fn categories_deduplicated() {
        let albums = vec![record(1, &["情侶", "人像"]), record(2, &["情侶"])];
        assert_eq!(
            derive_categories(&albums, &default_order()),
            vec!["人像", "情侶"]
        );
    }

    #[test]
    fn reserved_labels_excluded_from_categories() {
        let albums = vec![record(1, &["街拍", "情侶"]), record(2, &["風景"])];
        assert_eq!(derive_categories(&albums, &default_order()), vec!["情侶"]);
    }

    #[test]
    fn no_categories() {
        let albums = vec![record(1, &[])];
        assert!(derive_categories(&albums, &default_order()).is_empty());
    }

    #[test]
    fn scan_derives_categories() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1-A|活動,街拍", &["cover.jpg", "1.jpg"]);
        make_album(tmp.path(), "2-B|desc|人像", &["cover.jpg", "1.jpg"]);

        let report = scan_default(tmp.path()).unwrap();
        assert_eq!(report.catalog.categories, vec!["人像", "活動"]);
    }
}

//! CLI output formatting.
//!
//! # Audience
//!
//! The person reading this output is renaming folders in a file manager, not
//! reading code. Every skipped folder is reported with its name and what was
//! found in it file by file, so the fix is obvious from the report alone.
//!
//! # Output Format
//!
//! ## Skipped folders (stderr)
//!
//! ```text
//! warning: album 3 skipped: no photos
//!     Folder: 3-Jon & Pei|火車站|情侶
//!     Files:
//!         cover.jpg: cover
//!         photo.jpg: skipped, no number at the end of the name
//!         notes.txt: skipped, not an image
//!     Name photos with a number at the end of the file name:
//!         ok:  photo-1.jpg, photo-2.jpg, photo-10.jpg
//!         ...
//! ```
//!
//! ## Summary (stdout)
//!
//! ```text
//! Special folders
//!     street: 12 photos
//!     landscape: 0 photos
//!
//! Albums
//! 005 Jonathan & Jennie (8 photos)
//!     Cover: public/images/album5-Jonathan & Jennie|情侶/cover.jpg
//!     Categories: 情侶
//!
//! Categories
//!     人像, 情侶
//!
//! 4 albums, 12 special photos, 1 folder skipped
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and do no I/O, so tests assert
//! on lines directly. `print_*` wrappers write them out.

use crate::catalog::SpecialKind;
use crate::classify::{COVER_FILENAMES, FileOutcome, FileTrace};
use crate::scan::{ScanError, ScanReport, SkipReason, SkippedFolder};

/// Format an album id as 3-digit zero-padded.
fn format_index(id: u32) -> String {
    format!("{:0>3}", id)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Describe one classified file.
fn describe_outcome(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Cover => "cover".to_string(),
        FileOutcome::ExtraCover { chosen } => {
            format!("skipped, {chosen} is used as the cover")
        }
        FileOutcome::Photo(n) => format!("photo #{n}"),
        FileOutcome::NotAnImage => "skipped, not an image".to_string(),
        FileOutcome::NoTrailingDigits => {
            "skipped, no number at the end of the name".to_string()
        }
        FileOutcome::NonUtf8Name => "skipped, name is not valid UTF-8".to_string(),
        FileOutcome::Unreadable(reason) => format!("skipped, unreadable ({reason})"),
    }
}

fn trace_lines(trace: &[FileTrace], depth: usize) -> Vec<String> {
    if trace.is_empty() {
        return vec![format!("{}(folder is empty)", indent(depth))];
    }
    trace
        .iter()
        .map(|t| {
            format!(
                "{}{}: {}",
                indent(depth),
                t.filename,
                describe_outcome(&t.outcome)
            )
        })
        .collect()
}

/// Naming guidance shown when a folder has no usable photos.
fn photo_naming_hint() -> Vec<String> {
    vec![
        format!("{}Name photos with a number at the end of the file name:", indent(1)),
        format!("{}ok:  photo-1.jpg, photo-2.jpg, photo-10.jpg", indent(2)),
        format!("{}ok:  01.jpg, 02.jpg, 03.jpg", indent(2)),
        format!("{}ok:  img_1.jpg, image_001.jpg", indent(2)),
        format!("{}ok:  photo1.jpg, photo2.jpg", indent(2)),
        format!("{}bad: photo.jpg, image.jpg (no number at the end)", indent(2)),
    ]
}

fn folder_name_hint() -> Vec<String> {
    vec![
        format!("{}Expected folder names:", indent(1)),
        format!("{}N-title|categories", indent(2)),
        format!("{}N-title|description|categories", indent(2)),
    ]
}

/// Format the report for one skipped folder.
pub fn format_skipped_folder(skip: &SkippedFolder) -> Vec<String> {
    let mut lines = Vec::new();
    match skip.reason {
        SkipReason::BadFolderName => {
            lines.push(format!(
                "warning: skipped \"{}\": folder name does not match the naming format",
                skip.folder
            ));
            lines.extend(folder_name_hint());
        }
        SkipReason::NonUtf8Name => {
            lines.push(format!(
                "warning: skipped \"{}\": folder name is not valid UTF-8",
                skip.folder
            ));
        }
        SkipReason::MissingCover { id } => {
            lines.push(format!(
                "warning: album {} skipped: no cover image ({})",
                id,
                COVER_FILENAMES.join(", ")
            ));
            lines.push(format!("{}Folder: {}", indent(1), skip.folder));
            lines.push(format!("{}Files:", indent(1)));
            lines.extend(trace_lines(&skip.trace, 2));
        }
        SkipReason::NoPhotos { id } => {
            lines.push(format!("warning: album {} skipped: no photos", id));
            lines.push(format!("{}Folder: {}", indent(1), skip.folder));
            lines.push(format!("{}Files:", indent(1)));
            lines.extend(trace_lines(&skip.trace, 2));
            lines.extend(photo_naming_hint());
        }
    }
    lines
}

/// Print every skipped folder to stderr.
pub fn print_skipped_folders(skipped: &[SkippedFolder]) {
    for skip in skipped {
        for line in format_skipped_folder(skip) {
            eprintln!("{}", line);
        }
    }
}

/// Format the summary of a successful scan.
pub fn format_scan_output(report: &ScanReport) -> Vec<String> {
    let catalog = &report.catalog;
    let mut lines = Vec::new();

    lines.push("Special folders".to_string());
    for kind in SpecialKind::ALL {
        lines.push(format!(
            "{}{}: {}",
            indent(1),
            kind.folder_name(),
            plural(catalog.special(kind).len(), "photo", "photos")
        ));
    }

    lines.push(String::new());
    lines.push("Albums".to_string());
    for album in &catalog.albums {
        lines.push(format!(
            "{} {} ({})",
            format_index(album.id),
            album.title,
            plural(album.images.len(), "photo", "photos")
        ));
        if !album.description.is_empty() {
            lines.push(format!("{}{}", indent(1), album.description));
        }
        lines.push(format!("{}Cover: {}", indent(1), album.cover));
        if !album.categories.is_empty() {
            lines.push(format!(
                "{}Categories: {}",
                indent(1),
                album.categories.join(", ")
            ));
        }
        if let Some((_, notes)) = report.notes.iter().find(|(id, _)| *id == album.id) {
            lines.extend(trace_lines(notes, 1));
        }
    }

    lines.push(String::new());
    lines.push("Categories".to_string());
    if catalog.categories.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    } else {
        lines.push(format!("{}{}", indent(1), catalog.categories.join(", ")));
    }

    lines.push(String::new());
    lines.push(format!(
        "{}, {}, {}",
        plural(catalog.albums.len(), "album", "albums"),
        plural(catalog.special_photo_count(), "special photo", "special photos"),
        plural(report.skipped.len(), "folder skipped", "folders skipped")
    ));

    lines
}

/// Print the scan summary to stdout.
pub fn print_scan_output(report: &ScanReport) {
    for line in format_scan_output(report) {
        println!("{}", line);
    }
}

/// Format a fatal scan error with guidance for the operator.
pub fn format_fatal(err: &ScanError) -> Vec<String> {
    let mut lines = vec![format!("error: {}", err)];
    match err {
        ScanError::NothingFound(_) => {
            lines.extend(folder_name_hint());
            lines.push(format!("{}Or add photos to the special folders:", indent(1)));
            for kind in SpecialKind::ALL {
                lines.push(format!("{}{}/", indent(2), kind.folder_name()));
            }
        }
        ScanError::NoValidAlbums { skipped } => {
            let mut details = Vec::new();
            for skip in skipped {
                details.extend(format_skipped_folder(skip));
            }
            // Skip details first, then the error line last
            details.extend(lines);
            lines = details;
        }
        _ => {}
    }
    lines
}

/// Print a fatal scan error to stderr.
pub fn print_fatal(err: &ScanError) {
    for line in format_fatal(err) {
        eprintln!("{}", line);
    }
}

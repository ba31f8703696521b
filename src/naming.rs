//! Folder and file name parsing.
//!
//! Album folders carry their metadata in the name itself, pipe-delimited:
//!
//! ```text
//! 1-John & Emmie|情侶                       → id=1, no description
//! 2-Johnny & Crystal|螢橋國中|情侶          → id=2, description "螢橋國中"
//! 3-Jon & Pei|火車站|情侶,風景              → two categories
//! album4-Jonathan & Jennie|溫暖時刻|情侶    → optional "album" prefix
//! ```
//!
//! The first segment is always `<id>-<title>`. With two segments the second
//! is the category list; with three or more the second is the description
//! and the third the category list. Anything after the third is ignored.
//!
//! Photo files are ordered by the digit run at the end of their stem:
//! `photo-10.jpg` → 10, `img_001.png` → 1, `07.webp` → 7.

/// Metadata decoded from an album folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumFolderName {
    pub id: u32,
    pub title: String,
    /// Empty when the name has only two segments, or when the description
    /// segment is blank.
    pub description: String,
    /// Trimmed, non-empty category labels in the order written.
    pub categories: Vec<String>,
}

/// Parse an album folder name.
///
/// `prefix` is a literal word stripped from the start of the name when present
/// (case-sensitive), so `album4-Title|cat` parses like `4-Title|cat`.
///
/// Returns `None` for names that don't fit the grammar. Stray folders are a
/// normal condition, so this never errors.
///
/// - `"1-John & Emmie|情侶"` → id=1, title="John & Emmie", description="", categories=["情侶"]
/// - `"3-Jon & Pei|火車站|情侶,風景"` → description="火車站", categories=["情侶", "風景"]
/// - `"2-Title||情侶"` → description=""
/// - `"notes"` → None (no pipe)
/// - `"draft-Title|情侶"` → None (no numeric id)
pub fn parse_album_folder_name(name: &str, prefix: &str) -> Option<AlbumFolderName> {
    let normalized = if prefix.is_empty() {
        name
    } else {
        name.strip_prefix(prefix).unwrap_or(name)
    };

    let segments: Vec<&str> = normalized.split('|').collect();
    if segments.len() < 2 {
        return None;
    }

    let (id, title) = parse_id_and_title(segments[0])?;

    let (description, categories) = if segments.len() == 2 {
        (String::new(), split_categories(segments[1]))
    } else {
        (segments[1].trim().to_string(), split_categories(segments[2]))
    };

    Some(AlbumFolderName {
        id,
        title,
        description,
        categories,
    })
}

/// Parse the `<digits>-<rest>` head segment. `rest` must be non-empty before
/// trimming; the returned title is trimmed.
fn parse_id_and_title(segment: &str) -> Option<(u32, String)> {
    let (digits, rest) = segment.split_once('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || rest.is_empty() {
        return None;
    }
    let id = digits.parse::<u32>().ok()?;
    Some((id, rest.trim().to_string()))
}

/// Split a comma-separated category list, trimming and dropping blanks.
fn split_categories(segment: &str) -> Vec<String> {
    segment
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

/// Extract the trailing digit run of a file stem as a sequence number.
///
/// - `"photo-10"` → Some(10)
/// - `"img_001"` → Some(1)
/// - `"photo"` → None
/// - `"2024-shoot-a"` → None (digits not at the end)
///
/// A run too long for `u64` yields `None`.
pub fn trailing_number(stem: &str) -> Option<u64> {
    let digits_start = stem
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    stem[digits_start..].parse().ok()
}

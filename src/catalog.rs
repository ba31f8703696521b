//! The catalog document: data model, persistence, and consumer queries.
//!
//! The catalog is the single output of a run. It is serialized as
//! pretty-printed JSON with the field names the browser UI expects:
//!
//! ```json
//! {
//!   "categories": ["人像", "情侶"],
//!   "specialFolders": {
//!     "street": ["public/images/street/a.jpg"],
//!     "landscape": []
//!   },
//!   "albums": [
//!     {
//!       "id": 2,
//!       "title": "Johnny & Crystal",
//!       "description": "螢橋國中",
//!       "categories": ["情侶"],
//!       "cover": "public/images/2-Johnny & Crystal|螢橋國中|情侶/cover.jpg",
//!       "images": ["public/images/2-Johnny & Crystal|螢橋國中|情侶/photo-1.jpg"]
//!     }
//!   ]
//! }
//! ```
//!
//! Albums are stored newest first (`id` descending) and `categories` is
//! already deduplicated and ordered, so consumers render them as-is.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The two flat, metadata-free photo pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKind {
    Street,
    Landscape,
}

impl SpecialKind {
    pub const ALL: [SpecialKind; 2] = [SpecialKind::Street, SpecialKind::Landscape];

    /// Folder name under the images directory.
    pub fn folder_name(self) -> &'static str {
        match self {
            SpecialKind::Street => "street",
            SpecialKind::Landscape => "landscape",
        }
    }

    /// Category label reserved for this pool. Albums tagged with it are
    /// pinned and kept out of the derived category list.
    pub fn category_label(self) -> &'static str {
        match self {
            SpecialKind::Street => "街拍",
            SpecialKind::Landscape => "風景",
        }
    }

    pub fn from_folder_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.folder_name() == name)
    }
}

/// Whether a category label is reserved for a special collection.
pub fn is_reserved_label(category: &str) -> bool {
    SpecialKind::ALL
        .iter()
        .any(|k| k.category_label() == category)
}

/// One album, built from a folder whose name and contents passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub cover: String,
    pub images: Vec<String>,
}

impl AlbumRecord {
    /// Pinned albums carry a reserved label and are shown with the special
    /// collections rather than in the filterable album grid.
    pub fn is_pinned(&self) -> bool {
        self.categories.iter().any(|c| is_reserved_label(c))
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialFolders {
    #[serde(default)]
    pub street: Vec<String>,
    #[serde(default)]
    pub landscape: Vec<String>,
}

/// The full catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub categories: Vec<String>,
    pub special_folders: SpecialFolders,
    pub albums: Vec<AlbumRecord>,
}

impl Catalog {
    /// Photos of one special collection.
    pub fn special(&self, kind: SpecialKind) -> &[String] {
        match kind {
            SpecialKind::Street => &self.special_folders.street,
            SpecialKind::Landscape => &self.special_folders.landscape,
        }
    }

    pub fn special_photo_count(&self) -> usize {
        self.special_folders.street.len() + self.special_folders.landscape.len()
    }

    /// Albums for the main grid: pinned albums excluded, optionally narrowed
    /// to one category. `None` means "all". Catalog order is preserved.
    pub fn gallery_albums(&self, filter: Option<&str>) -> Vec<&AlbumRecord> {
        self.albums
            .iter()
            .filter(|a| !a.is_pinned())
            .filter(|a| filter.is_none_or(|f| a.has_category(f)))
            .collect()
    }

    /// Find an album by id.
    pub fn album(&self, id: u32) -> Option<&AlbumRecord> {
        self.albums.iter().find(|a| a.id == id)
    }
}

/// Serialize the catalog the way it is written to disk.
pub fn to_json(catalog: &Catalog) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Write the catalog, replacing any existing document in one step.
///
/// The JSON goes to a temporary file in the destination directory, which is
/// then renamed over `path`. Readers see either the old or the new document.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let json = to_json(catalog)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Load a catalog document.
pub fn read_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

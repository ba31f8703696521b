//! # Album Catalog
//!
//! Builds the photo-gallery catalog for a static portfolio site. The
//! filesystem is the data source: album folders carry their metadata in their
//! names, photos are ordered by the number at the end of their file name, and
//! the result is one JSON document the browser UI reads at startup.
//!
//! ```text
//! public/images/  →  scan  →  Catalog  →  src/albums.json
//! ```
//!
//! # Naming Conventions
//!
//! ```text
//! public/images/
//! ├── street/                         # special collection, every image listed
//! ├── landscape/                      # special collection, every image listed
//! ├── 1-John & Emmie|情侶/            # id 1, no description, one category
//! │   ├── cover.jpg
//! │   ├── photo-1.jpg
//! │   └── photo-10.jpg                # after photo-2, not before
//! └── album2-Johnny|螢橋國中|情侶,風景/ # id 2, description, two categories
//!     ├── cover.png
//!     └── 01.jpg
//! ```
//!
//! Folders that don't follow the conventions are skipped with a report that
//! lists every file and what it was taken for. Skips never abort the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Folder name grammar and trailing-number extraction |
//! | [`classify`] | Sorts an album's files into cover, ordered photos, and skipped |
//! | [`special`] | Reads the flat `street/` and `landscape/` collections |
//! | [`scan`] | Walks the images directory, applies acceptance rules, assembles the catalog |
//! | [`catalog`] | Catalog data model, atomic JSON write, and the queries the UI performs |
//! | [`config`] | Optional `catalog.toml` loading and validation |
//! | [`output`] | CLI report formatting: skipped-folder diagnostics and run summary |
//!
//! # Reproducibility
//!
//! Directory entries are always read in sorted order and every sort is
//! stable, so scanning an unchanged tree twice writes byte-identical output.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod naming;
pub mod output;
pub mod scan;
pub mod special;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Companion assets (box art and manuals)
//!
//! An included entry `Foo.bin` pulls in every `images/Foo*.png` and
//! `manuals/Foo*.pdf` from the source category directory. Matching is a
//! literal prefix/suffix test on file names, so brackets and other glob
//! metacharacters in titles need no escaping.

use std::collections::BTreeSet;
use std::path::Path;

use romsift_fs::io;

use crate::Result;
use crate::layout::CategoryFile;

/// One kind of companion asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetKind {
    /// Subdirectory of the category holding the assets
    pub dir: CategoryFile,
    /// Required file name suffix
    pub extension: &'static str,
    /// Human-readable label for logs
    pub label: &'static str,
}

pub const IMAGES: AssetKind = AssetKind {
    dir: CategoryFile::ImagesDir,
    extension: ".png",
    label: "images",
};

pub const MANUALS: AssetKind = AssetKind {
    dir: CategoryFile::ManualsDir,
    extension: ".pdf",
    label: "manuals",
};

/// The entry name with its last extension removed.
pub fn entry_stem(entry: &str) -> &str {
    Path::new(entry)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(entry)
}

/// Companion asset paths (`<dir>/<name>`) for the included entries.
///
/// Returns `None` when the asset directory does not exist.
pub fn find_assets(
    source_root: &Path,
    kind: AssetKind,
    include: &[String],
) -> Result<Option<BTreeSet<String>>> {
    let dir = source_root.join(kind.dir);
    if !dir.is_dir() {
        return Ok(None);
    }

    let available = io::list_files(&dir)?;
    let mut found = BTreeSet::new();
    for entry in include {
        let stem = entry_stem(entry);
        found.extend(
            available
                .iter()
                .filter(|name| {
                    name.len() >= stem.len() + kind.extension.len()
                        && name.starts_with(stem)
                        && name.ends_with(kind.extension)
                })
                .map(|name| format!("{}/{}", kind.dir, name)),
        );
    }
    Ok(Some(found))
}

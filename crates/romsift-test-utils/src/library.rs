//! [`Library`] builder for romsift test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary base directory plus a sibling destination directory.
///
/// # Example
///
/// ```rust,no_run
/// use romsift_test_utils::Library;
///
/// let lib = Library::new();
/// lib.add_entries("gba", &["Game (USA).gba", "Game (Japan).gba"]);
/// lib.add_asset("gba", "images", "Game (USA).png", b"png");
/// assert!(lib.source("gba").join("Game (USA).gba").is_file());
/// ```
pub struct Library {
    temp_dir: TempDir,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    /// Create empty `base/` and `dest/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("base")).unwrap();
        fs::create_dir(temp_dir.path().join("dest")).unwrap();
        Self { temp_dir }
    }

    /// The base directory holding source categories.
    pub fn base(&self) -> PathBuf {
        self.temp_dir.path().join("base")
    }

    /// The destination root.
    pub fn dest(&self) -> PathBuf {
        self.temp_dir.path().join("dest")
    }

    /// Source directory of `category`.
    pub fn source(&self, category: &str) -> PathBuf {
        self.base().join(category)
    }

    /// Destination directory of `category`.
    pub fn mirror(&self, category: &str) -> PathBuf {
        self.dest().join(category)
    }

    /// Create entries whose content is derived from their name.
    pub fn add_entries(&self, category: &str, names: &[&str]) {
        for name in names {
            self.add_file(category, name, format!("rom:{name}").as_bytes());
        }
    }

    /// Create one file in the source category, creating the category.
    pub fn add_file(&self, category: &str, name: &str, content: &[u8]) {
        let dir = self.source(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    /// Create a companion asset under `<category>/<kind>/<name>`.
    pub fn add_asset(&self, category: &str, kind: &str, name: &str, content: &[u8]) {
        let dir = self.source(category).join(kind);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    /// Write an override file such as `whitelist.custom.txt`.
    pub fn write_override(&self, category: &str, file: &str, names: &[&str]) {
        let dir = self.source(category);
        fs::create_dir_all(&dir).unwrap();
        let mut content = names.join("\n");
        content.push('\n');
        fs::write(dir.join(file), content).unwrap();
    }

    /// Lines of a list file in the source category.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_list(&self, category: &str, file: &str) -> Vec<String> {
        let path = self.source(category).join(file);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read list: {}", path.display()))
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Sorted names of the regular files in the destination category.
    pub fn mirrored_files(&self, category: &str) -> Vec<String> {
        list_dir(&self.mirror(category))
    }

    /// Assert that `path` (relative to the destination root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_mirrored(&self, path: &str) {
        let full_path = self.dest().join(path);
        assert!(
            full_path.exists(),
            "Expected file to be mirrored: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the destination root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_mirrored(&self, path: &str) {
        let full_path = self.dest().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to be mirrored: {}",
            full_path.display()
        );
    }
}

fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

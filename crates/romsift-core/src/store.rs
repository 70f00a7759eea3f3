//! Persistence of the per-category list files

use std::path::{Path, PathBuf};

use romsift_fs::io;

use crate::layout::CategoryFile;
use crate::{Error, Result};

/// The two final lists of a category, each sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryLists {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Operator-maintained overrides; absent files read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Reads and writes the list files of one category directory.
#[derive(Debug, Clone)]
pub struct ListStore {
    root: PathBuf,
}

impl ListStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The category directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a well-known file inside the category directory.
    pub fn path(&self, file: CategoryFile) -> PathBuf {
        self.root.join(file)
    }

    /// Names of the regular files in the category directory.
    pub fn raw_entries(&self) -> Result<Vec<String>> {
        Ok(io::list_files(&self.root)?)
    }

    /// Read both override files.
    pub fn read_overrides(&self) -> Result<Overrides> {
        let include = io::read_lines_if_exists(&self.path(CategoryFile::WhitelistCustom))?;
        let exclude = io::read_lines_if_exists(&self.path(CategoryFile::BlacklistCustom))?;
        Ok(Overrides {
            include: include.unwrap_or_default(),
            exclude: exclude.unwrap_or_default(),
        })
    }

    /// Replace both generated lists.
    pub fn write_lists(&self, lists: &CategoryLists) -> Result<()> {
        io::write_lines(&self.path(CategoryFile::WhitelistAuto), &lists.include)?;
        io::write_lines(&self.path(CategoryFile::BlacklistAuto), &lists.exclude)?;
        Ok(())
    }

    /// Read the generated include list.
    pub fn read_include(&self) -> Result<Vec<String>> {
        self.read_required(CategoryFile::WhitelistAuto)
    }

    /// Read the generated exclude list.
    pub fn read_exclude(&self) -> Result<Vec<String>> {
        self.read_required(CategoryFile::BlacklistAuto)
    }

    /// Read both generated lists.
    pub fn read_lists(&self) -> Result<CategoryLists> {
        Ok(CategoryLists {
            include: self.read_include()?,
            exclude: self.read_exclude()?,
        })
    }

    fn read_required(&self, file: CategoryFile) -> Result<Vec<String>> {
        let path = self.path(file);
        match io::read_lines_if_exists(&path)? {
            Some(lines) => Ok(lines),
            None => Err(Error::ListNotFound { path }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn missing_overrides_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ListStore::new(dir.path());
        assert_eq!(store.read_overrides().unwrap(), Overrides::default());
    }

    #[test]
    fn overrides_are_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("whitelist.custom.txt"), "Pokemon (Japan).gb\n").unwrap();
        fs::write(dir.path().join("blacklist.custom.txt"), "Tetris (World).gb\r\n\n").unwrap();

        let overrides = ListStore::new(dir.path()).read_overrides().unwrap();
        assert_eq!(overrides.include, vec!["Pokemon (Japan).gb"]);
        assert_eq!(overrides.exclude, vec!["Tetris (World).gb"]);
    }

    #[test]
    fn write_then_read_lists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ListStore::new(dir.path());
        let lists = CategoryLists {
            include: vec!["A (USA).bin".into(), "B (USA).bin".into()],
            exclude: vec!["C (Japan).bin".into()],
        };

        store.write_lists(&lists).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("whitelist.auto.txt")).unwrap(),
            "A (USA).bin\nB (USA).bin\n"
        );
        assert_eq!(store.read_lists().unwrap(), lists);
    }

    #[test]
    fn missing_generated_list_is_precondition_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ListStore::new(dir.path()).read_include().unwrap_err();
        assert!(matches!(err, Error::ListNotFound { .. }));
    }
}

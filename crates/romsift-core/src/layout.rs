//! Well-known names inside a category directory.

use std::path::Path;

/// Files and subdirectories a category directory may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFile {
    /// Generated include list
    WhitelistAuto,
    /// Generated exclude list
    BlacklistAuto,
    /// Operator-maintained include overrides
    WhitelistCustom,
    /// Operator-maintained exclude overrides
    BlacklistCustom,
    /// Companion box-art directory
    ImagesDir,
    /// Companion manual directory
    ManualsDir,
}

impl CategoryFile {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WhitelistAuto => "whitelist.auto.txt",
            Self::BlacklistAuto => "blacklist.auto.txt",
            Self::WhitelistCustom => "whitelist.custom.txt",
            Self::BlacklistCustom => "blacklist.custom.txt",
            Self::ImagesDir => "images",
            Self::ManualsDir => "manuals",
        }
    }
}

impl AsRef<Path> for CategoryFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for CategoryFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

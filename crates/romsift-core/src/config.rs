//! Run configuration
//!
//! `Options` is built once at startup (from an optional TOML file plus
//! command-line flags) and passed by reference into every component. Nothing
//! in this crate reads process-wide state.
//!
//! ```toml
//! base_dir = "/srv/roms"
//! destination_dir = "/media/sdcard/roms"
//! no_manuals = true
//!
//! [rules]
//! sports = true
//! racing = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Category names processed when the operator asks for "all".
pub const ALL_CATEGORIES: &[&str] = &[
    "gb", "gba", "gbc", "genesis", "n64", "nes", "psp", "psx", "snes",
];

/// Optional classification rules. Each `true` enables an exclusion rule,
/// except `english`, which widens the region filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleToggles {
    /// Exclude board, card, casino and quiz games
    pub boardgames: bool,
    /// Exclude children's franchise titles
    pub kids: bool,
    /// Exclude racing titles
    pub racing: bool,
    /// Exclude sports titles
    pub sports: bool,
    /// Exclude region-specific platform re-releases
    pub rereleases: bool,
    /// Exclude video cartridges
    pub video: bool,
    /// Also accept entries tagged with the `En` language marker
    pub english: bool,
}

impl RuleToggles {
    /// Combine two toggle sets; a rule enabled in either stays enabled.
    pub fn union(self, other: RuleToggles) -> RuleToggles {
        RuleToggles {
            boardgames: self.boardgames || other.boardgames,
            kids: self.kids || other.kids,
            racing: self.racing || other.racing,
            sports: self.sports || other.sports,
            rereleases: self.rereleases || other.rereleases,
            video: self.video || other.video,
            english: self.english || other.english,
        }
    }
}

/// Process-wide options, read-only after startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Directory containing one subdirectory per category
    pub base_dir: Option<PathBuf>,
    /// Mirror destination; no sync happens without it
    pub destination_dir: Option<PathBuf>,
    /// Create missing directories without asking
    pub initialize: bool,
    /// Classification rule switches
    pub rules: RuleToggles,
    /// Skip companion images
    pub no_images: bool,
    /// Skip companion manuals
    pub no_manuals: bool,
}

impl Options {
    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be parsed, or an I/O error
    /// if it cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = romsift_fs::io::read_text(path)?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Overlay command-line values on top of file values.
    ///
    /// Paths given on the command line replace file paths; boolean switches
    /// are OR'd so a flag can only turn a behavior on.
    pub fn overlay(mut self, cli: Options) -> Self {
        if cli.base_dir.is_some() {
            self.base_dir = cli.base_dir;
        }
        if cli.destination_dir.is_some() {
            self.destination_dir = cli.destination_dir;
        }
        self.initialize |= cli.initialize;
        self.no_images |= cli.no_images;
        self.no_manuals |= cli.no_manuals;
        self.rules = self.rules.union(cli.rules);
        self
    }
}

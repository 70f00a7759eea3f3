//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use romsift_core::{ALL_CATEGORIES, Options, RuleToggles};

/// romsift - Curate ROM categories into include/exclude lists and mirror them
///
/// Examples:
///   romsift --console-name gba                      # Build lists for gba/
///   romsift --console-name all --destination-dir /media/sd
///   romsift --console-name snes --no-sports --no-racing
#[derive(Parser, Debug)]
#[command(name = "romsift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding one subdirectory per category (defaults to the current directory)
    #[arg(short, long, env = "ROMSIFT_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Categories to process, comma separated; "all" expands to every known console
    #[arg(short, long, required = true, value_delimiter = ',')]
    pub console_name: Vec<String>,

    /// Mirror destination; without it only the lists are generated
    #[arg(short, long, env = "ROMSIFT_DESTINATION_DIR")]
    pub destination_dir: Option<PathBuf>,

    /// Create missing directories without asking
    #[arg(short, long)]
    pub initialize: bool,

    /// Exclude board, card, casino and quiz games
    #[arg(long)]
    pub no_boardgames: bool,

    /// Exclude children's franchise titles
    #[arg(long)]
    pub no_kids: bool,

    /// Exclude racing titles
    #[arg(long)]
    pub no_racing: bool,

    /// Exclude sports titles
    #[arg(long)]
    pub no_sports: bool,

    /// Exclude region-specific platform re-releases
    #[arg(long)]
    pub no_rereleases: bool,

    /// Exclude video cartridges
    #[arg(long)]
    pub no_video: bool,

    /// Also accept entries tagged with the En language marker
    #[arg(long)]
    pub english: bool,

    /// Do not copy companion images
    #[arg(long)]
    pub no_images: bool,

    /// Do not copy companion manuals
    #[arg(long)]
    pub no_manuals: bool,

    /// TOML file with default options
    #[arg(long, env = "ROMSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Continue with the next category after an error
    #[arg(short, long)]
    pub keep_going: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Options given on the command line, before any config file is applied.
    pub fn options(&self) -> Options {
        Options {
            base_dir: self.base_dir.clone(),
            destination_dir: self.destination_dir.clone(),
            initialize: self.initialize,
            rules: RuleToggles {
                boardgames: self.no_boardgames,
                kids: self.no_kids,
                racing: self.no_racing,
                sports: self.no_sports,
                rereleases: self.no_rereleases,
                video: self.no_video,
                english: self.english,
            },
            no_images: self.no_images,
            no_manuals: self.no_manuals,
        }
    }

    /// Requested categories with "all" expanded, first occurrence kept.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for name in &self.console_name {
            let expanded: Vec<&str> = if name == "all" {
                ALL_CATEGORIES.to_vec()
            } else {
                vec![name.as_str()]
            };
            for category in expanded {
                if !category.is_empty() && !categories.iter().any(|c| c == category) {
                    categories.push(category.to_string());
                }
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("romsift").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn console_name_is_required() {
        assert!(Cli::try_parse_from(["romsift"]).is_err());
    }

    #[test]
    fn all_expands_to_known_consoles() {
        let cli = parse(&["--console-name", "all"]);
        assert_eq!(cli.categories(), ALL_CATEGORIES);
    }

    #[test]
    fn categories_are_deduplicated_in_order() {
        let cli = parse(&["-c", "snes,gba", "-c", "all"]);
        let categories = cli.categories();
        assert_eq!(&categories[..2], ["snes", "gba"]);
        assert_eq!(categories.len(), ALL_CATEGORIES.len());
    }

    #[test]
    fn rule_flags_map_to_toggles() {
        let cli = parse(&["-c", "gb", "--no-sports", "--no-kids", "--english"]);
        let options = cli.options();
        assert!(options.rules.sports);
        assert!(options.rules.kids);
        assert!(options.rules.english);
        assert!(!options.rules.racing);
        assert!(!options.rules.boardgames);
        assert!(!options.rules.rereleases);
        assert!(!options.rules.video);
    }

    #[test]
    fn rerelease_and_video_flags_map_to_toggles() {
        let options = parse(&["-c", "gba", "--no-rereleases", "--no-video"]).options();
        assert!(options.rules.rereleases);
        assert!(options.rules.video);
        assert!(!options.rules.sports);
    }

    #[test]
    fn paths_are_carried_over() {
        let cli = parse(&["-c", "gb", "-b", "/srv/roms", "-d", "/mnt/sd", "--no-manuals"]);
        let options = cli.options();
        assert_eq!(options.base_dir, Some(PathBuf::from("/srv/roms")));
        assert_eq!(options.destination_dir, Some(PathBuf::from("/mnt/sd")));
        assert!(options.no_manuals);
        assert!(!options.no_images);
    }
}

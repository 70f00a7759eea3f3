//! Tests for list building against a real category directory

use pretty_assertions::assert_eq;
use romsift_core::{CategoryFile, Error, ListBuilder, ListStore, RuleToggles};
use romsift_test_utils::Library;
use std::fs;

fn build(lib: &Library, category: &str, toggles: RuleToggles) -> romsift_core::CategoryLists {
    ListBuilder::new(toggles)
        .build(category, &ListStore::new(lib.source(category)))
        .unwrap()
}

#[test]
fn test_build_writes_both_lists() {
    let lib = Library::new();
    lib.add_entries(
        "gb",
        &[
            "Tetris (World).gb",
            "Tetris (Japan).gb",
            "Dr. Mario (World) (Rev 1).gb",
            "Dr. Mario (World).gb",
            "[BIOS] Game Boy Boot ROM (World).gb",
        ],
    );

    build(&lib, "gb", RuleToggles::default());

    assert_eq!(
        lib.read_list("gb", "whitelist.auto.txt"),
        vec!["Dr. Mario (World) (Rev 1).gb", "Tetris (World).gb"]
    );
    assert_eq!(
        lib.read_list("gb", "blacklist.auto.txt"),
        vec![
            "Dr. Mario (World).gb",
            "Tetris (Japan).gb",
            "[BIOS] Game Boy Boot ROM (World).gb",
        ]
    );
}

#[test]
fn test_generated_lists_do_not_classify_themselves() {
    let lib = Library::new();
    lib.add_entries("nes", &["Zelda (USA).nes"]);

    build(&lib, "nes", RuleToggles::default());
    let second = build(&lib, "nes", RuleToggles::default());

    assert_eq!(second.include, vec!["Zelda (USA).nes"]);
    assert!(second.exclude.is_empty());
}

#[test]
fn test_rebuild_is_byte_identical() {
    let lib = Library::new();
    lib.add_entries(
        "snes",
        &[
            "Super Metroid (Japan, USA) (En,Ja).sfc",
            "F-Zero (USA).sfc",
            "F-Zero (Japan).sfc",
            "Madden NFL '94 (USA).sfc",
        ],
    );
    lib.write_override("snes", "whitelist.custom.txt", &["F-Zero (Japan).sfc"]);
    let toggles = RuleToggles {
        sports: true,
        ..Default::default()
    };

    build(&lib, "snes", toggles);
    let whitelist = fs::read(lib.source("snes").join(CategoryFile::WhitelistAuto)).unwrap();
    let blacklist = fs::read(lib.source("snes").join(CategoryFile::BlacklistAuto)).unwrap();

    build(&lib, "snes", toggles);
    assert_eq!(
        fs::read(lib.source("snes").join(CategoryFile::WhitelistAuto)).unwrap(),
        whitelist
    );
    assert_eq!(
        fs::read(lib.source("snes").join(CategoryFile::BlacklistAuto)).unwrap(),
        blacklist
    );
}

#[test]
fn test_overrides_win_over_rules() {
    let lib = Library::new();
    lib.add_entries(
        "gba",
        &[
            "Pokemon - Leaf Green (Japan).gba",
            "Golden Sun (USA).gba",
            "Metroid Fusion (USA).gba",
        ],
    );
    lib.write_override("gba", "whitelist.custom.txt", &["Pokemon - Leaf Green (Japan).gba"]);
    lib.write_override("gba", "blacklist.custom.txt", &["Golden Sun (USA).gba"]);

    let lists = build(&lib, "gba", RuleToggles::default());

    assert_eq!(
        lists.include,
        vec!["Metroid Fusion (USA).gba", "Pokemon - Leaf Green (Japan).gba"]
    );
    assert_eq!(lists.exclude, vec!["Golden Sun (USA).gba"]);
}

#[test]
fn test_override_files_are_never_rewritten() {
    let lib = Library::new();
    lib.add_entries("gb", &["Tetris (World).gb"]);
    lib.write_override("gb", "blacklist.custom.txt", &["Tetris (World).gb"]);
    let before = fs::read(lib.source("gb").join("blacklist.custom.txt")).unwrap();

    build(&lib, "gb", RuleToggles::default());

    assert_eq!(
        fs::read(lib.source("gb").join("blacklist.custom.txt")).unwrap(),
        before
    );
}

#[test]
fn test_subdirectories_are_not_entries() {
    let lib = Library::new();
    lib.add_entries("psx", &["Crash Bandicoot (USA).chd"]);
    lib.add_asset("psx", "images", "Crash Bandicoot (USA).png", b"png");

    let lists = build(&lib, "psx", RuleToggles::default());

    assert_eq!(lists.include, vec!["Crash Bandicoot (USA).chd"]);
    assert!(lists.exclude.is_empty());
}

#[test]
fn test_missing_category_dir_is_an_error() {
    let lib = Library::new();
    let err = ListBuilder::default()
        .build("n64", &ListStore::new(lib.source("n64")))
        .unwrap_err();

    assert!(matches!(err, Error::Fs(_)), "got: {err:?}");
}

//! Built-in classification patterns
//!
//! Every pattern is an unanchored search: an entry matches if any alternative
//! occurs anywhere in its name. Case sensitivity is deliberate per
//! alternative and must not be normalized.

use std::sync::LazyLock;

use regex::Regex;

use super::{CategoryRule, RuleGate};

/// Dot-files and list/metadata/save formats that never enter either list.
pub const IGNORED_EXTENSIONS: &[&str] = &[".auto", ".png", ".sql", ".srm", ".torrent", ".txt", ".xml"];

/// BIOS dumps, bad dumps, pre-release builds and utility cartridges.
static UTILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[Aa]ction.*[Rr]eplay|Bible|Cheat.*Code|Demo.*(CD|Disc)|Game.*Boy.*Camera|Game[Ss]hark",
        r"|InfoGenius|Preview|Sewing.*Machine.*Operation.*Software|System.*Kiosk",
        r"|[Bb][Ii][Oo][Ss]",
        r"|\(.*Beta.*\)|\(.*Demo.*\)|\(.*Pirate.*\)|\(.*Program.*\)|\(.*Proto.*\)|\(.*Sample.*\)",
        r"|\[b\]",
    ))
    .unwrap()
});

static BOARDGAMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"Board[Gg]ame|Board\sGame|Brain.*Game|Caesars\sPalace|Card\sGames|Chess|Fun.*Pak",
        r"|Gambling|Puzzle|Quiz|Scrabble|Sudoku|Vegas.*Games|Vegas.*Stakes|Wheel.*Fortune",
        r"|Who.*Wants.*Millionaire|[Uu][Nn][Oo]",
    ))
    .unwrap()
});

static KIDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"Arthur!|Barbie|Beauty.*Beast|Blue.*Clues|Bob.*Builder|Bratz|Cat\sin\sthe\sHat",
        r"|Despicable\sMe|Disney|Dragon\sTales|Every\sChild\sCan\sSucceed|Fun.*Learn",
        r"|Kim.*Possible|Lilo.*Stitch|NeoPets|Nickelodeon|Petz|Pooh|Sesame\sStreet|Snow.*White",
        r"|Stuart.*Little|Tonka|Zoboomafoo|[Ww][Ii][Nn][Xx]",
    ))
    .unwrap()
});

static RACING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(1|2|3)Xtreme|ATV|BMX|Biking|F1|Ferrari|Ford|Formula\s(1|One)|Grand.*Prix",
        r"|Harley.*Davidson|Lamborghini.*American.*Challenge|Madden|Micro.*Machines|Motocross",
        r"|NASCAR|Road.*Rash|Roadsters|Scooter|Super(bike|cross)|Test.*Drive|Top.*Gear",
        r"|Touring.*Car|V-Rally|Xtreme.*Wheels|[Rr]ace|Racing|Mototrax|Monster.*Jam",
    ))
    .unwrap()
});

static SPORTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[Bb]aseball|Bases.*Loaded|Big.*Bass.*Championship|Big\sOl.*Bass|Billiards|Boarder",
        r"|Bottom\sof\sthe\s9th|Bowling|Boxing|Cabela|Darts|ECW|ESPN|FIFA*|Faire\sGames",
        r"|Fisherman|Fishing|Golf|Hockey|Karnaaj.*Rally|MLB|NBA|NCAA|NFL|NHL|Olympic|PGA",
        r"|Poker|Pool|Skate|Soccer|Sports|Super.*Bowl|TNA\sImpact|Tennis|Toobin|UEFA|UFC",
        r"|Ultimate.*Fighting.*Championship|Ultimate.*Paintball|Ultimate.*Surfing|WCW|WRC",
        r"|WWE|WWF|World.*Cup|Wrestling",
    ))
    .unwrap()
});

/// Region-specific platform re-releases and mini-console ports.
static RERELEASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\([^()]*Virtual\sConsole[^()]*\)|\([^()]*Switch\sOnline[^()]*\)|\(NP\)",
        r"|Classic\sMini|\([^()]*Genesis\sMini[^()]*\)|\([^()]*Mega\sDrive\sMini[^()]*\)",
    ))
    .unwrap()
});

/// Cartridges carrying video content instead of a game.
static VIDEO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Game\sBoy\sAdvance\sVideo|GBA\sVideo").unwrap());

/// Entries carrying one of these region markers are kept.
pub(crate) static ACCEPTED_REGIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(U\)|\(.*USA.*\)|\(.*World.*\)").unwrap());

/// Language marker accepted when the `english` toggle is on. The `En`
/// code must sit inside a single parenthetical group.
pub(crate) static ACCEPTED_LANGUAGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\bEn\b[^()]*\)").unwrap());

/// Returns the built-in category rules in evaluation order.
pub fn builtin_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new("utility", RuleGate::Always, &UTILITY),
        CategoryRule::new("boardgames", RuleGate::Boardgames, &BOARDGAMES),
        CategoryRule::new("kids", RuleGate::Kids, &KIDS),
        CategoryRule::new("racing", RuleGate::Racing, &RACING),
        CategoryRule::new("sports", RuleGate::Sports, &SPORTS),
        CategoryRule::new("rereleases", RuleGate::Rereleases, &RERELEASES),
        CategoryRule::new("video", RuleGate::Video, &VIDEO),
    ]
}

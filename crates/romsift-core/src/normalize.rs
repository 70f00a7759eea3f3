//! Name normalization for region matching
//!
//! The `En` language tag is a substring of the `Enhance` keyword, so a title
//! such as `Game (Enhanced Edition) (Japan).sfc` would be read as carrying
//! an English tag. Region rules therefore run on a normalized name in which
//! the keyword is swapped for a sentinel, and the swap is undone before the
//! name goes anywhere else.

use std::borrow::Cow;

/// Keyword that hides a region abbreviation.
pub const AMBIGUOUS_KEYWORD: &str = "Enhance";

/// Stand-in for [`AMBIGUOUS_KEYWORD`] while region rules run.
pub const SENTINEL: &str = "TEMPORARY";

/// Reversible keyword/sentinel substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameNormalizer;

impl NameNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Replace every occurrence of the keyword with the sentinel.
    pub fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if name.contains(AMBIGUOUS_KEYWORD) {
            Cow::Owned(name.replace(AMBIGUOUS_KEYWORD, SENTINEL))
        } else {
            Cow::Borrowed(name)
        }
    }

    /// Undo [`normalize`](Self::normalize).
    pub fn denormalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if name.contains(SENTINEL) {
            Cow::Owned(name.replace(SENTINEL, AMBIGUOUS_KEYWORD))
        } else {
            Cow::Borrowed(name)
        }
    }

    /// Whether `denormalize(normalize(name)) == name` holds.
    ///
    /// It fails only for names that already contain the sentinel.
    pub fn is_lossless(&self, name: &str) -> bool {
        !name.contains(SENTINEL)
    }
}

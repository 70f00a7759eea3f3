//! Revision resolution
//!
//! Releases of the same title that differ only by a `(Rev ...)` marker are
//! grouped under a base identity in which the marker is replaced by
//! [`REVISION_PLACEHOLDER`]. Only the greatest marker of each group is kept;
//! every other revision, and the unmarked release, moves to the exclude side.
//!
//! Markers are compared as strings, so `(Rev 2)` outranks `(Rev 10)`.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Placeholder standing in for the revision marker inside a base identity.
pub const REVISION_PLACEHOLDER: &str = "REPLACE_WITH_REV";

/// A parenthetical starting with `Rev` and ending in a digit. Greedy, so a
/// name with several parentheticals may yield a marker spanning them.
static REVISION_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(Rev.*\d\)").unwrap());

/// Releases sharing one base identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionGroup {
    /// Entry name with the marker replaced by the placeholder
    pub base: String,
    /// Raw marker strings seen for this base, ordered
    pub markers: BTreeSet<String>,
}

impl RevisionGroup {
    fn new(base: String) -> Self {
        Self {
            base,
            markers: BTreeSet::new(),
        }
    }

    /// The winning marker.
    pub fn latest(&self) -> Option<&str> {
        self.markers.last().map(String::as_str)
    }

    /// Markers that lose to [`latest`](Self::latest).
    pub fn superseded(&self) -> impl Iterator<Item = &str> {
        let count = self.markers.len().saturating_sub(1);
        self.markers.iter().take(count).map(String::as_str)
    }

    /// Rebuild the entry name carrying `marker`.
    pub fn name_for(&self, marker: &str) -> String {
        self.base.replace(REVISION_PLACEHOLDER, marker)
    }

    /// The entry name with no marker at all.
    ///
    /// Only a marker preceded by a space is removed; other shapes yield a
    /// name that cannot exist on disk and are skipped by the resolver.
    pub fn unmarked_name(&self) -> String {
        self.base.replace(&format!(" {REVISION_PLACEHOLDER}"), "")
    }
}

/// Result of [`RevisionResolver::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Include candidates after revision tie-breaking
    pub include: BTreeSet<String>,
    /// Entries demoted by the resolver
    pub exclude: BTreeSet<String>,
}

/// Picks the greatest revision of every title.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevisionResolver;

impl RevisionResolver {
    pub fn new() -> Self {
        Self
    }

    /// The first revision marker in `name`, if any.
    pub fn marker(name: &str) -> Option<&str> {
        REVISION_MARKER.find(name).map(|m| m.as_str())
    }

    /// Group every marked entry by its base identity.
    pub fn group<'a, I>(&self, entries: I) -> BTreeMap<String, RevisionGroup>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut groups: BTreeMap<String, RevisionGroup> = BTreeMap::new();
        for entry in entries {
            let Some(marker) = Self::marker(entry) else {
                continue;
            };
            let base = REVISION_MARKER
                .replace_all(entry, NoExpand(REVISION_PLACEHOLDER))
                .into_owned();
            groups
                .entry(base.clone())
                .or_insert_with(|| RevisionGroup::new(base))
                .markers
                .insert(marker.to_string());
        }
        groups
    }

    /// Keep the greatest revision of each title among `include`.
    ///
    /// Demoted names are only moved if they exist in `raw`; reconstructed
    /// names that were never on disk are skipped.
    pub fn resolve(&self, include: &BTreeSet<String>, raw: &BTreeSet<String>) -> Resolution {
        let mut resolution = Resolution {
            include: include.clone(),
            exclude: BTreeSet::new(),
        };

        for group in self.group(include).values() {
            let Some(latest) = group.latest() else {
                continue;
            };
            let keep = group.name_for(latest);
            tracing::debug!(base = %group.base, keep = %keep, "selected revision");
            resolution.include.insert(keep);

            let losers = group
                .superseded()
                .map(|marker| group.name_for(marker))
                .chain(std::iter::once(group.unmarked_name()));

            for name in losers {
                if raw.contains(&name) {
                    resolution.include.remove(&name);
                    resolution.exclude.insert(name);
                }
            }
        }

        resolution
    }
}

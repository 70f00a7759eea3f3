//! Pattern-based classification
//!
//! A [`RuleSet`] turns a raw directory listing into include and exclude
//! candidates in a fixed pipeline:
//!
//! 1. extension filter: list/metadata files are dropped from both sides
//! 2. category rules: `utility` always, the rest when toggled on
//! 3. region filter: entries without an accepted region marker are excluded,
//!    matched on the normalized name
//! 4. include = survivors minus excluded

mod builtins;
mod types;

use std::collections::BTreeSet;

pub use builtins::{IGNORED_EXTENSIONS, builtin_rules};
pub use types::{CategoryRule, RuleGate};

use crate::config::RuleToggles;
use crate::normalize::NameNormalizer;

/// Output of [`RuleSet::classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Entries that passed the extension filter
    pub entries: BTreeSet<String>,
    /// Entries dropped by the extension filter
    pub ignored: BTreeSet<String>,
    /// Survivors not matched by any exclusion
    pub include: BTreeSet<String>,
    /// Survivors matched by a category rule or failing the region filter
    pub exclude: BTreeSet<String>,
}

/// Ordered set of classification rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    /// Create a rule set holding the built-in rules.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Category rules in evaluation order.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Names of the rules that run under `toggles`.
    pub fn active_rules(&self, toggles: &RuleToggles) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|r| r.gate.enabled(toggles))
            .map(|r| r.name)
            .collect()
    }

    /// True for names the extension filter drops.
    pub fn is_ignored(name: &str) -> bool {
        name.starts_with('.') || IGNORED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
    }

    /// True if the normalized name carries an accepted region marker.
    pub fn has_accepted_region(normalized: &str, toggles: &RuleToggles) -> bool {
        builtins::ACCEPTED_REGIONS.is_match(normalized)
            || (toggles.english && builtins::ACCEPTED_LANGUAGES.is_match(normalized))
    }

    /// Split `entries` into include and exclude candidates.
    pub fn classify<I, S>(
        &self,
        entries: I,
        normalizer: &NameNormalizer,
        toggles: &RuleToggles,
    ) -> Classification
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = Classification::default();

        for entry in entries {
            let entry = entry.as_ref();
            if Self::is_ignored(entry) {
                result.ignored.insert(entry.to_string());
            } else {
                result.entries.insert(entry.to_string());
            }
        }

        for rule in self.rules.iter().filter(|r| r.gate.enabled(toggles)) {
            for entry in result.entries.iter().filter(|e| rule.matches(e)) {
                tracing::debug!(rule = rule.name, entry = %entry, "excluded by rule");
                result.exclude.insert(entry.clone());
            }
        }

        for entry in &result.entries {
            let normalized = normalizer.normalize(entry);
            if !Self::has_accepted_region(&normalized, toggles) {
                tracing::debug!(rule = "region", entry = %entry, "excluded by rule");
                result.exclude.insert(entry.clone());
            }
        }

        result.include = result.entries.difference(&result.exclude).cloned().collect();
        result
    }
}
